//! # Integration Tests
//!
//! Cross-crate scenarios.
//!
//! Covers:
//! - Contract snapshot tests
//! - Registry and dispatch scenarios end to end
//! - Config-driven emitter construction

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        assert_eq!(contracts::ERROR_EVENT, "error");
        let _ = contracts::DiagnosticSinkKind::Stderr;
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use anyhow::bail;
    use config_loader::{ConfigFormat, ConfigLoader, DEBUG_VAR};
    use emitter::{EventEmitter, Handle, MemorySink, Value};
    use serde_json::json;

    fn emitter() -> (EventEmitter, MemorySink) {
        let sink = MemorySink::new("e2e");
        let emitter = EventEmitter::builder().sink(sink.clone()).build();
        (emitter, sink)
    }

    fn counting(count: &Rc<Cell<u32>>) -> Handle {
        let count = Rc::clone(count);
        Handle::from_fn(move |_, _| {
            count.set(count.get() + 1);
            Ok(())
        })
    }

    /// Three plain listeners, targeted removal, then removal of everything.
    #[test]
    fn test_subscribe_unsubscribe_lifecycle() {
        let (emitter, _) = emitter();
        let (a, b, c) = (
            Rc::new(Cell::new(0)),
            Rc::new(Cell::new(0)),
            Rc::new(Cell::new(0)),
        );
        let handle_a = emitter.subscribe("foo", counting(&a));
        emitter.subscribe("foo", counting(&b));
        emitter.subscribe("foo", counting(&c));

        emitter.emit("foo", &[]).unwrap();
        assert_eq!((a.get(), b.get(), c.get()), (1, 1, 1));

        emitter.unsubscribe("foo", &handle_a);
        emitter.emit("foo", &[]).unwrap();
        assert_eq!((a.get(), b.get(), c.get()), (1, 2, 2));

        assert!(!emitter.unsubscribe_all("foo").has_subscribers("foo"));
        emitter.emit("foo", &[]).unwrap();
        assert_eq!((a.get(), b.get(), c.get()), (1, 2, 2));
    }

    /// Cancelling a pending one-shot leaves the other listeners intact.
    #[test]
    fn test_cancelled_once_never_fires() {
        let (emitter, _) = emitter();
        let counter = Rc::new(Cell::new(0));
        let cb = emitter.subscribe("foo", counting(&counter));
        emitter.subscribe("foo", counting(&counter));
        emitter.subscribe("foo", counting(&counter));

        let c = Rc::clone(&counter);
        let pending = emitter.once("foo", move |_, _| {
            c.set(c.get() + 100);
            Ok(())
        });
        emitter.unsubscribe("foo", &pending);
        assert_eq!(emitter.subscribers("foo").len(), 3);

        emitter.emit("foo", &[]).unwrap().unsubscribe("foo", &cb);
        assert_eq!(counter.get(), 3);
        emitter.emit("foo", &[]).unwrap().unsubscribe("foo", &cb);
        assert_eq!(counter.get(), 5);
        assert!(emitter.has_subscribers("foo"));
    }

    /// The failing middle listener blocks neither its sibling nor the report.
    #[test]
    fn test_fault_isolation() {
        let (emitter, sink) = emitter();
        let echo = Rc::new(RefCell::new(String::new()));
        let err = Rc::new(RefCell::new(String::new()));

        let e = Rc::clone(&err);
        emitter.on("error", move |_, args| {
            *e.borrow_mut() = args.last().and_then(Value::as_str).unwrap_or_default().to_string();
            Ok(())
        });
        let out = Rc::clone(&echo);
        emitter.on("test2", move |_, args| {
            out.borrow_mut().push_str("echo: ");
            out.borrow_mut().push_str(args[0].as_str().unwrap_or_default());
            Ok(())
        });
        emitter.on("test2", |_, args| {
            bail!("test2: {}", args[0].as_str().unwrap_or_default())
        });
        let out = Rc::clone(&echo);
        let echo2 = emitter.on("test2", move |_, args| {
            out.borrow_mut().push_str("echo2: ");
            out.borrow_mut().push_str(args[0].as_str().unwrap_or_default());
            Ok(())
        });

        emitter.emit_safe("test2", &[json!("works!")]);
        assert_eq!(*echo.borrow(), "echo: works!echo2: works!");
        assert_eq!(*err.borrow(), "Event \"test2\" failed: test2: works!");

        echo.borrow_mut().clear();
        err.borrow_mut().clear();
        assert_eq!(emitter.subscribers("test2").len(), 3);
        emitter.unsubscribe("test2", &echo2);
        assert_eq!(emitter.subscribers("test2").len(), 2);

        emitter.emit_safe("test2", &[json!("works!")]);
        assert_eq!(*echo.borrow(), "echo: works!");
        assert_eq!(*err.borrow(), "Event \"test2\" failed: test2: works!");
        assert!(sink.lines().is_empty());
    }

    /// Each link of a one-shot chain needs its own emission.
    #[test]
    fn test_chained_once() {
        let (emitter, _) = emitter();
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        emitter.once("x", move |e, _| {
            let c = Rc::clone(&c);
            e.once("x", move |e, _| {
                let c = Rc::clone(&c);
                e.once("x", move |_, _| {
                    c.set(c.get() + 1);
                    Ok(())
                });
                Ok(())
            });
            Ok(())
        });

        for expected in [0, 0, 1] {
            assert_eq!(emitter.subscribers("x").len(), 1);
            emitter.emit("x", &[]).unwrap();
            assert_eq!(count.get(), expected);
        }
        assert!(emitter.subscribers("x").is_empty());

        for _ in 0..3 {
            emitter.emit("x", &[]).unwrap();
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_subscribers_idempotent() {
        let (emitter, _) = emitter();
        emitter.on("foo", |_, _| Ok(()));
        emitter.once("foo", |_, _| Ok(()));

        let first = emitter.subscribers("foo");
        let second = emitter.subscribers("foo");
        assert_eq!(first, second);
        assert!(second[1].is_once());
    }

    #[test]
    fn test_config_driven_emitter() {
        let config = ConfigLoader::load_from_str(
            "[diagnostics]\nsink = \"stderr\"\nverbose = false\n",
            ConfigFormat::Toml,
        )
        .unwrap();
        let config =
            ConfigLoader::apply_overrides(config, |key| (key == DEBUG_VAR).then(|| "1".to_string()))
                .unwrap();
        assert!(config.diagnostics.verbose);

        let sink = MemorySink::new("configured");
        let emitter = emitter::EmitterBuilder::new(config).sink(sink.clone()).build();
        emitter.emit("error", &[json!("unhandled")]).unwrap();

        assert_eq!(sink.contents(), "-- Emit error in\nunhandled\n");
        assert_eq!(emitter.metrics().snapshot().unhandled_count, 1);
    }
}
