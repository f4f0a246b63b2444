use altigraph_core::window::SlidingWindow;

#[test]
fn test_push_evicts_oldest() {
    let mut w: SlidingWindow<f64> = SlidingWindow::new(3);
    for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
        w.push(v);
    }
    assert_eq!(w.len(), 3);
    let values: Vec<f64> = w.iter().copied().collect();
    assert_eq!(values, vec![3.0, 4.0, 5.0]); // eldste kastet først
}

#[test]
fn test_never_exceeds_capacity() {
    let mut w: SlidingWindow<i32> = SlidingWindow::new(4);
    for v in 0..100 {
        w.push(v);
        assert!(w.len() <= w.capacity());
    }
}

#[test]
fn test_clear_keeps_capacity() {
    let mut w: SlidingWindow<f64> = SlidingWindow::new(5);
    w.push(1.0);
    w.push(2.0);
    w.clear();
    assert!(w.is_empty());
    assert_eq!(w.capacity(), 5);
}

#[test]
fn test_deltas() {
    let mut w: SlidingWindow<f64> = SlidingWindow::new(4);
    for v in [10.0, 12.0, 11.0, 11.0] {
        w.push(v);
    }
    assert_eq!(w.deltas(), vec![2.0, -1.0, 0.0]);
}

#[test]
fn test_deltas_short_window() {
    let mut w: SlidingWindow<f64> = SlidingWindow::new(4);
    assert!(w.deltas().is_empty());
    w.push(7.0);
    assert!(w.deltas().is_empty());
}
