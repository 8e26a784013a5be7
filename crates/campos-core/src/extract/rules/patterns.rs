//! Regex patterns for form field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Nome completo" must come first or "Nome" would swallow "completo: ..."
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)(?:nome completo|nome)[:\-–]?\s*(.+)"
    ).unwrap();

    // CPF (Brazilian individual taxpayer number), 000.000.000-00
    pub static ref CPF_PATTERN: Regex = Regex::new(
        r"[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}"
    ).unwrap();

    // dd/mm/yyyy or dd-mm-yyyy, separators chosen independently
    pub static ref DATE_PATTERN: Regex = Regex::new(
        r"[0-9]{2}[/\-][0-9]{2}[/\-][0-9]{4}"
    ).unwrap();
}
