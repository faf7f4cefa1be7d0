use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};

use counter_store::{CounterStore, ListenerError};

/// Build the render listener printing the store's count to `out`
///
/// Holds the store weakly so subscribing it does not keep the store alive.
/// Write failures are reported back to the store as a `ListenerError`.
pub fn render_to<W: Write + 'static>(
    store: &Rc<CounterStore>,
    out: Rc<RefCell<W>>,
) -> impl Fn() -> Result<(), ListenerError> + 'static {
    let store: Weak<CounterStore> = Rc::downgrade(store);
    move || {
        let Some(store) = store.upgrade() else {
            return Ok(());
        };
        writeln!(out.borrow_mut(), "Count: {}", store.get_state().count)
            .map_err(|e| ListenerError::new(format!("Failed to render count: {}", e)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use counter_store::{add, counter_store, CounterState, DispatchError};
    use pretty_assertions::assert_eq;
    use std::io;

    /// Writer that rejects every "Count" line
    pub(crate) struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.starts_with(b"Count") {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            } else {
                Ok(buf.len())
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_prints_current_count() {
        let store = Rc::new(counter_store(CounterState::new(41)));
        let out = Rc::new(RefCell::new(Vec::new()));
        let render = render_to(&store, Rc::clone(&out));

        render().unwrap();
        store.try_subscribe(render);
        store.dispatch(add()).unwrap();

        let text = String::from_utf8(out.borrow().clone()).unwrap();
        assert_eq!(text, "Count: 41\nCount: 42\n");
    }

    #[test]
    fn test_render_reports_write_failure() {
        let store = Rc::new(counter_store(CounterState::initial()));
        let render = render_to(&store, Rc::new(RefCell::new(BrokenPipe)));

        let err = render().unwrap_err();
        assert!(err.message().contains("pipe closed"));
    }

    #[test]
    fn test_render_failure_reaches_dispatch() {
        let store = Rc::new(counter_store(CounterState::initial()));
        let sub = store.try_subscribe(render_to(&store, Rc::new(RefCell::new(BrokenPipe))));

        let err = store.dispatch(add()).unwrap_err();

        assert!(matches!(err, DispatchError::Listener { id, .. } if id == sub.id()));
        assert_eq!(store.get_state().count, 1);
    }

    #[test]
    fn test_render_is_noop_once_store_dropped() {
        let store = Rc::new(counter_store(CounterState::initial()));
        let out = Rc::new(RefCell::new(Vec::new()));
        let render = render_to(&store, Rc::clone(&out));
        drop(store);

        render().unwrap();
        assert!(out.borrow().is_empty());
    }
}
