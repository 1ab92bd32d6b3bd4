//! Draw schedule core: number/date conversion, consistency checks, and
//! reconciliation of OCR-read ticket fields.

pub mod check;
pub mod reconcile;
pub mod schedule;

pub use check::{check_draw_number_against_draw_date, check_purchase_date_against_draw_number};
pub use reconcile::{Reconciler, reconcile};
pub use schedule::{
    draw_date_from_number, draw_number_from_date, draw_number_from_purchase_date, epoch_date, format_date,
    parse_date, parse_draw_number,
};
