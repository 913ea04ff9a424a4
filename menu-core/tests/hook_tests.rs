use std::cell::Cell;
use std::rc::Rc;

use menu_core::hook::{Hook, InterceptChain};

#[test]
fn unsubscribed_handler_stops_firing() {
    let hits = Rc::new(Cell::new(0));
    let mut hook = Hook::new();

    let h = hits.clone();
    let first = hook.subscribe(move || h.set(h.get() + 1));
    let h = hits.clone();
    hook.subscribe(move || h.set(h.get() + 10));

    hook.notify();
    assert_eq!(hits.get(), 11);

    assert!(hook.unsubscribe(first));
    assert!(!hook.unsubscribe(first));
    assert_eq!(hook.len(), 1);

    hook.notify();
    assert_eq!(hits.get(), 21);
}

#[test]
fn removed_interceptor_no_longer_claims() {
    let mut chain = InterceptChain::new();
    let claim = chain.push(|| true);
    chain.push(|| false);
    assert!(chain.intercepted());

    assert!(chain.remove(claim));
    assert!(!chain.intercepted());
    assert_eq!(chain.len(), 1);
    assert!(!chain.remove(claim));
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut chain = InterceptChain::new();
    let first = chain.push(|| true);
    chain.remove(first);
    let second = chain.push(|| true);
    assert_ne!(first, second);
    assert!(!chain.remove(first));
    assert!(chain.intercepted());
}
