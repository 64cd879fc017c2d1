// File: crates/chart-core/tests/document.rs
// Purpose: Ready signal and container rendering through the document host.

use std::cell::Cell;
use std::rc::Rc;

use chart_core::{
    ChartError, ChartOptions, Container, Document, RenderOptions, SeriesOptions, XAxisOptions,
};

fn quiet_document() -> Document {
    Document::new().with_render_options(RenderOptions { draw_labels: false, ..RenderOptions::default() })
}

fn options() -> ChartOptions {
    ChartOptions {
        x_axis: XAxisOptions::with_categories(["x", "y", "z"]),
        series: vec![SeriesOptions::new("s", vec![1.0, 2.0, 3.0])],
        ..ChartOptions::default()
    }
}

#[test]
fn handlers_wait_for_ready_and_run_once() {
    let mut doc = quiet_document();
    let calls = Rc::new(Cell::new(0));
    let c = Rc::clone(&calls);
    doc.ready(move |_| {
        c.set(c.get() + 1);
        Ok(())
    })
    .unwrap();
    assert_eq!(calls.get(), 0);
    assert!(!doc.is_ready());

    doc.fire_ready().unwrap();
    doc.fire_ready().unwrap();
    assert_eq!(calls.get(), 1);
    assert!(doc.is_ready());
}

#[test]
fn handler_added_after_ready_runs_immediately() {
    let mut doc = quiet_document();
    doc.fire_ready().unwrap();
    let ran = Rc::new(Cell::new(false));
    let r = Rc::clone(&ran);
    doc.ready(move |_| {
        r.set(true);
        Ok(())
    })
    .unwrap();
    assert!(ran.get());
}

#[test]
fn handlers_run_in_registration_order() {
    let mut doc = quiet_document();
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    for i in 0..3 {
        let o = Rc::clone(&order);
        doc.ready(move |_| {
            o.borrow_mut().push(i);
            Ok(())
        })
        .unwrap();
    }
    doc.fire_ready().unwrap();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn renders_into_container() {
    let mut doc = quiet_document();
    doc.add_container("c1", Container::new(300, 200));
    doc.ready(|d| d.highcharts("#c1", options())).unwrap();
    doc.fire_ready().unwrap();

    let container = doc.container("#c1").expect("container");
    let png = container.rendered_png().expect("rendered");
    assert!(png.starts_with(&[137, 80, 78, 71]));
    assert_eq!(container.chart_options(), Some(&options()));
}

#[test]
fn writes_container_output_file() {
    let out = std::path::PathBuf::from("target/test_out/document_c2.png");
    let _ = std::fs::remove_file(&out);
    let mut doc = quiet_document();
    doc.add_container("#c2", Container::new(200, 120).with_output(&out));
    doc.fire_ready().unwrap();
    doc.highcharts("c2", options()).unwrap();
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn missing_container_is_reported() {
    let mut doc = quiet_document();
    doc.ready(|d| d.highcharts("#nope", options())).unwrap();
    let err = doc.fire_ready().unwrap_err();
    assert!(matches!(err, ChartError::MissingContainer(ref s) if s == "#nope"));
}

#[test]
fn first_error_returned_after_all_handlers_ran() {
    let mut doc = quiet_document();
    let later = Rc::new(Cell::new(false));
    let l = Rc::clone(&later);
    doc.ready(|_| Err(ChartError::InvalidData("first".into()))).unwrap();
    doc.ready(move |_| {
        l.set(true);
        Ok(())
    })
    .unwrap();
    let err = doc.fire_ready().unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(ref m) if m == "first"));
    assert!(later.get());
}

#[test]
fn invalid_options_leave_container_empty() {
    let mut doc = quiet_document();
    doc.add_container("c1", Container::default());
    let mut bad = options();
    bad.series[0].data.pop();
    let err = doc.highcharts("#c1", bad).unwrap_err();
    assert!(matches!(err, ChartError::SeriesLength { expected: 3, actual: 2, .. }));
    assert!(doc.container("c1").unwrap().rendered_png().is_none());
}
