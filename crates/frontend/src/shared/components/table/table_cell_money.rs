//! Ячейка таблицы для сумм в рупиях
//!
//! ```rust,ignore
//! <TableCellMoney value=row.revenue />
//! <TableCellMoney value=total bold=true />
//! ```

use super::number_format::format_inr;
use leptos::prelude::*;
use thaw::*;

/// Сумма в формате INR (индийская группировка разрядов), выравнивание вправо
#[component]
pub fn TableCellMoney(
    value: f64,

    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <TableCellLayout>
                <span style=style>{format_inr(value)}</span>
            </TableCellLayout>
        </TableCell>
    }
}

/// Ячейка с процентом доли, один знак после запятой
#[component]
pub fn TableCellPercent(value: f64) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <TableCellLayout>{format!("{:.1}%", value)}</TableCellLayout>
        </TableCell>
    }
}
