// ============================================================================
// CART - Carrito del cliente (solo memoria, nunca se persiste)
// ============================================================================
// Invariante: toda línea presente tiene qty >= 1. Solo `remove` la elimina.
// El precio es el snapshot tomado al agregar; no se vuelve a consultar al
// confirmar (riesgo conocido de precio desactualizado).
// ============================================================================

use crate::models::{LineItem, Product};

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.qty)
    }
}

/// Mapa producto -> línea, en orden de inserción
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, product_id: i64) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }

    /// Agrega una unidad; si el producto no estaba, entra con qty = 1
    pub fn add(&mut self, product: Product) {
        match self.position(product.id) {
            Some(i) => self.lines[i].qty += 1,
            None => self.lines.push(CartLine { product, qty: 1 }),
        }
    }

    pub fn increment(&mut self, product_id: i64) {
        if let Some(i) = self.position(product_id) {
            self.lines[i].qty += 1;
        }
    }

    /// Nunca baja de 1 ni elimina la línea
    pub fn decrement(&mut self, product_id: i64) {
        if let Some(i) = self.position(product_id) {
            let line = &mut self.lines[i];
            line.qty = line.qty.saturating_sub(1).max(1);
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn quantity_of(&self, product_id: i64) -> Option<u32> {
        self.position(product_id).map(|i| self.lines[i].qty)
    }

    /// Cuerpo para `POST /orders/confirm`
    pub fn to_line_items(&self) -> Vec<LineItem> {
        self.lines
            .iter()
            .map(|l| LineItem {
                product_id: l.product.id,
                qty: l.qty,
            })
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            code: format!("P-{}", id),
            name: Some(format!("Producto {}", id)),
            description: None,
            price,
            stock: 10,
        }
    }

    #[test]
    fn add_decrement_increment_example() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000.0));
        cart.add(product(1, 1000.0));
        cart.decrement(1);
        cart.increment(1);

        assert_eq!(cart.quantity_of(1), Some(2));
        assert_eq!(cart.total(), 2000.0);
    }

    #[test]
    fn decrement_on_single_unit_keeps_the_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 500.0));
        cart.decrement(1);
        cart.decrement(1);
        assert_eq!(cart.quantity_of(1), Some(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_then_add_starts_again_at_one() {
        let mut cart = Cart::new();
        let p = product(2, 300.0);
        for _ in 0..5 {
            cart.add(p.clone());
        }
        cart.remove(2);
        assert_eq!(cart.quantity_of(2), None);

        cart.add(p);
        assert_eq!(cart.quantity_of(2), Some(1));
    }

    #[test]
    fn operations_on_missing_products_are_noops() {
        let mut cart = Cart::new();
        cart.increment(9);
        cart.decrement(9);
        cart.remove(9);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_and_line_items_follow_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product(3, 10.0));
        cart.add(product(1, 20.0));
        cart.add(product(3, 10.0));
        assert_eq!(
            cart.to_line_items(),
            vec![
                LineItem { product_id: 3, qty: 2 },
                LineItem { product_id: 1, qty: 1 },
            ]
        );

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.to_line_items().is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn total_uses_price_snapshot_from_add_time() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000.0));
        // El mismo producto con precio nuevo solo incrementa la línea existente
        cart.add(product(1, 1500.0));
        assert_eq!(cart.total(), 2000.0);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Add(i64),
        Increment(i64),
        Decrement(i64),
        Remove(i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let id = 1i64..=4;
        prop_oneof![
            id.clone().prop_map(Op::Add),
            id.clone().prop_map(Op::Increment),
            id.clone().prop_map(Op::Decrement),
            id.prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn quantities_stay_positive_and_total_matches(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut cart = Cart::new();
            // Modelo de referencia: (id, qty, precio al agregar)
            let mut model: Vec<(i64, u32, f64)> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(id) => {
                        let price = (id as f64) * 250.0;
                        cart.add(product(id, price));
                        match model.iter_mut().find(|(m, _, _)| *m == id) {
                            Some(entry) => entry.1 += 1,
                            None => model.push((id, 1, price)),
                        }
                    }
                    Op::Increment(id) => {
                        cart.increment(id);
                        if let Some(entry) = model.iter_mut().find(|(m, _, _)| *m == id) {
                            entry.1 += 1;
                        }
                    }
                    Op::Decrement(id) => {
                        cart.decrement(id);
                        if let Some(entry) = model.iter_mut().find(|(m, _, _)| *m == id) {
                            entry.1 = entry.1.saturating_sub(1).max(1);
                        }
                    }
                    Op::Remove(id) => {
                        cart.remove(id);
                        model.retain(|(m, _, _)| *m != id);
                    }
                }

                for line in cart.lines() {
                    prop_assert!(line.qty >= 1);
                }
            }

            let expected: f64 = model.iter().map(|(_, qty, price)| price * f64::from(*qty)).sum();
            prop_assert!((cart.total() - expected).abs() < 1e-6);
            prop_assert_eq!(
                cart.to_line_items(),
                model.iter().map(|(id, qty, _)| LineItem { product_id: *id, qty: *qty }).collect::<Vec<_>>()
            );
        }
    }
}
