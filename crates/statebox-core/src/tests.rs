#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::signal::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_with_borrows() {
        let sig = signal(vec![1, 2, 3]);
        let len = sig.with(|v| v.len());
        assert_eq!(len, 3);
    }

    #[test]
    fn test_subscription_fires_per_mutation() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(1);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_by_key() {
        let sig = signal(0);
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let key = sig.subscribe(move |_| *count_clone.borrow_mut() += 1);

        sig.set(1);
        sig.unsubscribe(key);
        sig.set(2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_stale_key_is_noop() {
        let sig = signal(0);
        let key = sig.subscribe(|_| {});
        sig.unsubscribe(key);
        sig.unsubscribe(key);
        sig.set(1);
    }

    #[test]
    fn test_watch_dispose() {
        let sig = signal(0);
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let guard = sig.watch(move |_| *count_clone.borrow_mut() += 1);

        sig.set(1);
        guard.run();
        guard.run(); // idempotent
        sig.set(2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_watcher_may_read_its_signal() {
        let sig = signal(5);
        let seen = Rc::new(RefCell::new(0));

        let seen_clone = seen.clone();
        let handle = sig.clone();
        sig.subscribe(move |_| *seen_clone.borrow_mut() = handle.get());

        sig.set(8);
        assert_eq!(*seen.borrow(), 8);
    }

    #[test]
    fn test_clone_shares_cell() {
        let a = signal(1);
        let b = a.clone();
        b.set(2);
        assert_eq!(a.get(), 2);
    }
}
