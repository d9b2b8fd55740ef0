//! Run / stop lifecycle and the idle hook.

use ember::{
    BoundedQueue, DispatchError, DispatchTable, EventDispatcher, Wakeup,
    testing::{CountingHandler, Recorder},
};
use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

mod common;
use common::{Signal, wait_until, wait_until_running};

#[test]
fn test_stop_with_nothing_pending_skips_handlers_and_idle() {
    let handlers = CountingHandler::new();
    let table = DispatchTable::<Signal, _>::from_fn(|_| handlers.clone());
    let idle = CountingHandler::new();
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();

    let stats = thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(table.with_idle(idle.clone())));
        // The initial empty pass still reaches the idle hook before waiting.
        wait_until(|| idle.count() == 1);
        dispatcher.stop();
        consumer.join().unwrap().unwrap()
    });

    assert_eq!(handlers.count(), 0);
    assert_eq!(idle.count(), 1);
    assert_eq!(stats.dispatched, 0);
    assert_eq!(stats.passes, 2);
    assert!(!dispatcher.is_running());
}

#[test]
fn test_idle_runs_once_per_pass_except_the_last() {
    let recorder = Recorder::new();
    let table = DispatchTable::<Signal, _>::from_fn(|signal| recorder.handler(signal));
    let idle = CountingHandler::new();
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();

    let stats = thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(table.with_idle(idle.clone())));
        for (round, signal) in [Signal::Zero, Signal::One, Signal::Two].into_iter().enumerate() {
            wait_until(|| idle.count() > round);
            dispatcher.emit(signal);
            wait_until(|| recorder.count() > round);
        }
        dispatcher.stop();
        consumer.join().unwrap().unwrap()
    });

    assert_eq!(stats.dispatched, 3);
    assert_eq!(idle.count() as u64, stats.passes - 1);
    assert!(idle.count() >= 3);
}

#[test]
fn test_idle_sees_fully_drained_queue() {
    let dispatcher = EventDispatcher::<Signal>::new(8).unwrap();
    let table = DispatchTable::<Signal, fn()>::from_fn(|_| (|| {}) as fn());
    let observed = Mutex::new(Vec::new());
    let on_idle = || observed.lock().unwrap().push(dispatcher.pending());

    for _ in 0..5 {
        dispatcher.emit(Signal::Two);
    }

    thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(table.with_idle(&on_idle)));
        wait_until(|| !observed.lock().unwrap().is_empty());
        dispatcher.stop();
        assert_eq!(consumer.join().unwrap().unwrap().dispatched, 5);
    });

    assert_eq!(observed.lock().unwrap()[0], 0);
}

#[test]
fn test_stop_before_run_ends_next_run_after_one_pass() {
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();
    let handlers = CountingHandler::new();
    let idle = CountingHandler::new();
    let table = DispatchTable::<Signal, _>::from_fn(|_| handlers.clone());

    dispatcher.emit(Signal::One);
    dispatcher.emit(Signal::Two);
    dispatcher.stop();
    assert!(!dispatcher.is_running());

    let stats = thread::scope(|scope| {
        scope
            .spawn(|| dispatcher.run(table.with_idle(idle.clone())))
            .join()
            .unwrap()
            .unwrap()
    });

    // Already-queued events are drained; the pending stop then ends the run.
    assert_eq!(stats.dispatched, 2);
    assert_eq!(stats.passes, 1);
    assert_eq!(handlers.count(), 2);
    assert_eq!(idle.count(), 0);

    // The stop was consumed by that run; the next one keeps going.
    thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(&table));
        wait_until_running(&dispatcher);
        thread::sleep(Duration::from_millis(10));
        assert!(dispatcher.is_running());
        assert!(!consumer.is_finished());

        dispatcher.stop();
        assert!(consumer.join().unwrap().is_ok());
    });
}

#[test]
fn test_stop_right_after_spawn_ends_run() {
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();
    let table = DispatchTable::<Signal, fn()>::from_fn(|_| (|| {}) as fn());

    for _ in 0..100 {
        thread::scope(|scope| {
            let consumer = scope.spawn(|| dispatcher.run(&table));
            dispatcher.stop();
            assert!(consumer.join().unwrap().is_ok());
        });
    }
    assert!(!dispatcher.is_running());
}

#[test]
fn test_stop_from_handler_leaves_no_wake_behind() {
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();
    let stopper = dispatcher.stop_handle();
    let stop_on_two = move || stopper.stop();
    let quiet = || {};
    let stopping = DispatchTable::<Signal, &(dyn Fn() + Sync)>::new([
        &quiet as &(dyn Fn() + Sync),
        &quiet,
        &stop_on_two,
    ])
    .unwrap();

    dispatcher.emit(Signal::Two);
    let first = thread::scope(|scope| scope.spawn(|| dispatcher.run(&stopping)).join().unwrap());
    assert_eq!(first.unwrap().passes, 1);

    // A fresh run with nothing queued and no stop must settle after exactly
    // one empty pass.
    let idle = CountingHandler::new();
    let table = DispatchTable::<Signal, fn()>::from_fn(|_| (|| {}) as fn());
    let stats = thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(table.with_idle(idle.clone())));
        wait_until(|| idle.count() == 1);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(idle.count(), 1);

        dispatcher.stop();
        consumer.join().unwrap().unwrap()
    });

    assert_eq!(idle.count(), 1);
    assert_eq!(stats.passes, 2);
}

#[test]
fn test_events_after_observed_stop_wait_for_next_run() {
    let dispatcher = EventDispatcher::<Signal>::new(8).unwrap();
    let recorder = Recorder::new();
    let stopper = dispatcher.stop_handle();
    let table = DispatchTable::<Signal, _>::from_fn(|signal| {
        let recorder = recorder.clone();
        let stopper = stopper.clone();
        move || {
            recorder.record(signal);
            if signal == Signal::Zero {
                stopper.stop();
            }
        }
    });

    // `One` is queued behind the stopping handler and drains in the same pass.
    dispatcher.emit(Signal::Zero);
    dispatcher.emit(Signal::One);
    let first = thread::scope(|scope| scope.spawn(|| dispatcher.run(&table)).join().unwrap());
    let first = first.unwrap();
    assert_eq!(first.dispatched, 2);
    assert_eq!(first.passes, 1);

    // Once the stop is observed nothing else is dispatched.
    dispatcher.emit(Signal::Two);
    dispatcher.emit(Signal::One);
    assert_eq!(dispatcher.pending(), 2);
    assert_eq!(recorder.entries(), vec![Signal::Zero, Signal::One]);

    thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(&table));
        wait_until(|| recorder.count() == 4);
        dispatcher.stop();
        assert_eq!(consumer.join().unwrap().unwrap().dispatched, 2);
    });

    assert_eq!(
        recorder.entries(),
        vec![Signal::Zero, Signal::One, Signal::Two, Signal::One]
    );
    assert_eq!(dispatcher.pending(), 0);
}

#[test]
fn test_events_emitted_mid_drain_join_the_same_pass() {
    let dispatcher = EventDispatcher::<Signal>::new(8).unwrap();
    let recorder = Recorder::new();
    let emitter = dispatcher.emitter();
    let table = DispatchTable::<Signal, _>::from_fn(|signal| {
        let recorder = recorder.clone();
        let emitter = emitter.clone();
        move || {
            recorder.record(signal);
            match signal {
                Signal::Zero => emitter.emit(Signal::One),
                Signal::One => emitter.emit(Signal::Two),
                Signal::Two => {}
            }
        }
    });
    let observed = Mutex::new(Vec::new());
    let on_idle = || observed.lock().unwrap().push((dispatcher.pending(), recorder.count()));

    dispatcher.emit(Signal::Zero);

    let stats = thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(table.with_idle(&on_idle)));
        wait_until(|| !observed.lock().unwrap().is_empty());
        dispatcher.stop();
        consumer.join().unwrap().unwrap()
    });

    // The first idle call already sees all three events handled.
    assert_eq!(observed.lock().unwrap()[0], (0, 3));
    assert_eq!(
        recorder.entries(),
        vec![Signal::Zero, Signal::One, Signal::Two]
    );
    assert_eq!(stats.dispatched, 3);
    assert_eq!(stats.passes, 2);
}

#[test]
fn test_stop_handle_from_another_thread() {
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();
    let table = DispatchTable::<Signal, fn()>::from_fn(|_| (|| {}) as fn());
    let handle = dispatcher.stop_handle();

    thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(&table));
        wait_until_running(&dispatcher);
        assert!(handle.is_running());

        let stopper = handle.clone();
        scope.spawn(move || stopper.stop()).join().unwrap();
        assert!(consumer.join().unwrap().is_ok());
    });

    assert!(!handle.is_running());
}

#[test]
fn test_repeated_stop_is_harmless() {
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();
    let table = DispatchTable::<Signal, fn()>::from_fn(|_| (|| {}) as fn());

    thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(&table));
        wait_until_running(&dispatcher);
        dispatcher.stop();
        dispatcher.stop();
        dispatcher.stop();
        assert!(consumer.join().unwrap().is_ok());
    });
    assert!(!dispatcher.is_running());
}

#[test]
fn test_concurrent_run_rejected() {
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();
    let table = DispatchTable::<Signal, fn()>::from_fn(|_| (|| {}) as fn());

    thread::scope(|scope| {
        let first = scope.spawn(|| dispatcher.run(&table));
        wait_until_running(&dispatcher);
        let second = scope.spawn(|| dispatcher.run(&table)).join().unwrap();
        assert_eq!(second.unwrap_err(), DispatchError::AlreadyRunning);

        dispatcher.stop();
        assert!(first.join().unwrap().is_ok());
    });
}

#[test]
fn test_events_emitted_before_first_run_are_dispatched() {
    let dispatcher = EventDispatcher::<Signal>::new(4).unwrap();
    let dispatched = AtomicUsize::new(0);
    let count = || {
        dispatched.fetch_add(1, Ordering::SeqCst);
    };
    let table = DispatchTable::<Signal, _>::from_fn(|_| &count);

    // No consumer yet: events stay queued.
    dispatcher.emit(Signal::One);
    dispatcher.emit(Signal::Zero);
    assert_eq!(dispatcher.pending(), 2);

    thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(&table));
        wait_until(|| dispatched.load(Ordering::SeqCst) == 2);
        dispatcher.stop();
        consumer.join().unwrap().unwrap();
    });
    assert_eq!(dispatcher.pending(), 0);
}

#[test]
fn test_wake_is_a_latch_not_a_counter() {
    let queue = BoundedQueue::<u8>::new(2).unwrap();
    queue.wake();
    queue.wake();
    assert_eq!(queue.wait(), Wakeup::Woken);

    // The second wake was absorbed by the first; data is needed now.
    queue.enqueue(7);
    assert_eq!(queue.wait(), Wakeup::Ready);
    assert_eq!(queue.try_dequeue(), Some(7));
}

#[test]
fn test_resize_unblocks_producer() {
    let dispatcher = EventDispatcher::<Signal>::new(1).unwrap();
    dispatcher.emit(Signal::Zero);

    thread::scope(|scope| {
        let producer = scope.spawn(|| dispatcher.emit(Signal::One));
        thread::sleep(Duration::from_millis(10));
        assert!(!producer.is_finished());

        dispatcher.resize(2).unwrap();
        producer.join().unwrap();
    });
    assert_eq!(dispatcher.pending(), 2);
}
