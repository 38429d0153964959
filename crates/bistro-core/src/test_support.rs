//! Presenter double shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cart::{CartLine, Summary};
use crate::presenter::Presenter;
use crate::types::{CatalogItem, Severity};

/// Which presenter method was called, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    Menu,
    Redraw,
    Notify,
    CheckoutState(bool),
}

#[derive(Debug, Default)]
struct Log {
    calls: Vec<Call>,
    menus: Vec<usize>,
    redraws: Vec<(Vec<CartLine>, Summary)>,
    notifications: Vec<(String, Severity)>,
    checkout_states: Vec<bool>,
}

/// Records every presenter call. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingPresenter {
    log: Rc<RefCell<Log>>,
}

impl RecordingPresenter {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.log.borrow().calls.clone()
    }

    pub(crate) fn menus_rendered(&self) -> Vec<usize> {
        self.log.borrow().menus.clone()
    }

    pub(crate) fn redraws(&self) -> Vec<(Vec<CartLine>, Summary)> {
        self.log.borrow().redraws.clone()
    }

    pub(crate) fn notifications(&self) -> Vec<(String, Severity)> {
        self.log.borrow().notifications.clone()
    }

    pub(crate) fn checkout_states(&self) -> Vec<bool> {
        self.log.borrow().checkout_states.clone()
    }
}

impl Presenter for RecordingPresenter {
    fn render_menu(&mut self, items: &[CatalogItem]) {
        let mut log = self.log.borrow_mut();
        log.calls.push(Call::Menu);
        log.menus.push(items.len());
    }

    fn on_cart_changed(&mut self, lines: &[CartLine], summary: &Summary) {
        let mut log = self.log.borrow_mut();
        log.calls.push(Call::Redraw);
        log.redraws.push((lines.to_vec(), *summary));
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        let mut log = self.log.borrow_mut();
        log.calls.push(Call::Notify);
        log.notifications.push((message.to_string(), severity));
    }

    fn on_checkout_state(&mut self, processing: bool) {
        let mut log = self.log.borrow_mut();
        log.calls.push(Call::CheckoutState(processing));
        log.checkout_states.push(processing);
    }
}
