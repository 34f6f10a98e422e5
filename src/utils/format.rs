// Formato de montos (COP) y fechas para las tablas

use chrono::{DateTime, NaiveDateTime};

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rest = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(rest.to_string());
            break;
        }
        groups.push(format!("{:03}", rest));
    }
    groups.reverse();
    groups.join(",")
}

/// `$1,234,500` / `$12.5` (máximo dos decimales, sin ceros sobrantes)
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;

    let decimals = if fraction == 0 {
        String::new()
    } else if fraction % 10 == 0 {
        format!(".{}", fraction / 10)
    } else {
        format!(".{:02}", fraction)
    };
    format!("{}${}{}", sign, whole, decimals)
}

/// Total de una orden; sin total (o total cero) se muestra "-"
pub fn format_order_total(total: Option<f64>) -> String {
    match total {
        Some(t) if t != 0.0 => format_money(t),
        _ => "-".to_string(),
    }
}

/// Fechas del backend (ISO-8601 con o sin zona) en formato local legible
pub fn format_date(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(r) if !r.trim().is_empty() => r.trim(),
        _ => return String::new(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y %H:%M:%S").to_string();
    }
    raw.to_string()
}
