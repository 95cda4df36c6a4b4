//! Box-drawn tables for the menu and order views.

use crate::domain::model::{MenuItem, Order};
use std::iter;

pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |left: char, fill: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(mid);
            }
            line.extend(iter::repeat(fill).take(width + 2));
        }
        line.push(right);
        line
    };

    let row_line = |cells: &[String]| {
        let mut line = String::from("│");
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:<width$} │", cell, width = *width));
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![
        border('╒', '═', '╤', '╕'),
        row_line(&header_cells),
    ];

    if rows.is_empty() {
        lines.push(border('╘', '═', '╧', '╛'));
        return lines.join("\n");
    }

    lines.push(border('╞', '═', '╪', '╡'));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(border('├', '─', '┼', '┤'));
        }
        lines.push(row_line(row));
    }
    lines.push(border('╘', '═', '╧', '╛'));

    lines.join("\n")
}

pub fn render_menu(items: &[MenuItem]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.name.clone(),
                format!("{:.2}", item.price),
                item.availability.to_string(),
            ]
        })
        .collect();
    render_table(&["ID", "Dish", "Price", "Availability"], &rows)
}

pub fn render_orders(orders: &[Order]) -> String {
    let rows: Vec<Vec<String>> = orders
        .iter()
        .map(|order| {
            vec![
                order.id.to_string(),
                order.customer.clone(),
                format!("{:.2}", order.total_price),
                order.status.to_string(),
            ]
        })
        .collect();
    render_table(&["Order ID", "Customer", "Total", "Status"], &rows)
}
