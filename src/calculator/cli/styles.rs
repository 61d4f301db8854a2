use console::Style;
use once_cell::sync::Lazy;

pub static ERROR_STYLE: Lazy<Style> = Lazy::new(|| Style::new().red().for_stderr());

pub static HINT_STYLE: Lazy<Style> = Lazy::new(|| Style::new().dim().for_stderr());

pub static RESULT_STYLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
