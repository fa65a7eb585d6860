//! Helpers shared by the integration tests.

use parm_pars_core::alert::Alerts;
use parm_pars_core::config::Config;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Diagnostic sink whose output stays readable after the reporter is gone.
#[derive(Clone, Default)]
pub struct Captured(Rc<RefCell<Vec<u8>>>);

impl Captured {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.borrow().clone())
            .unwrap()
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn alerts(strict: bool) -> (Alerts, Captured) {
    let captured = Captured::default();
    let alerts = Alerts::with_sink(Config::default().with_strict(strict), captured.clone());
    (alerts, captured)
}
