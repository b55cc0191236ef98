use crate::session::{BreakPoint, FunnelProgress, FunnelStage};

fn run(paths: &[&str]) -> FunnelProgress {
    let mut progress = FunnelProgress::default();
    for p in paths {
        progress.observe(p);
    }
    progress
}

#[test]
fn classifies_paths() {
    assert_eq!(FunnelStage::of_path("/product/9"), Some(FunnelStage::Browse));
    assert_eq!(FunnelStage::of_path("/cart/add"), Some(FunnelStage::Cart));
    assert_eq!(FunnelStage::of_path("/checkout"), Some(FunnelStage::Checkout));
    assert_eq!(FunnelStage::of_path("/cart/remove"), None);
    assert_eq!(FunnelStage::of_path("/checkout/confirm"), None);
    assert_eq!(FunnelStage::of_path("/products"), None);
}

#[test]
fn full_funnel_completes() {
    let progress = run(&["/product/9", "/cart/add", "/checkout"]);

    assert!(progress.is_complete());
    assert_eq!(progress.break_point(), None);
}

#[test]
fn intervening_paths_are_allowed() {
    let progress = run(&[
        "/search",
        "/product/1",
        "/product/2",
        "/user/profile",
        "/cart/add",
        "/cart/view",
        "/checkout",
    ]);

    assert!(progress.is_complete());
}

#[test]
fn out_of_order_stages_do_not_count() {
    let progress = run(&["/checkout", "/cart/add", "/product/1"]);

    assert!(!progress.is_complete());
    assert_eq!(progress.break_point(), Some(BreakPoint::Browse));
}

#[test]
fn break_points() {
    assert_eq!(run(&[]).break_point(), Some(BreakPoint::None));
    assert_eq!(run(&["/search"]).break_point(), Some(BreakPoint::None));
    assert_eq!(run(&["/product/1"]).break_point(), Some(BreakPoint::Browse));
    assert_eq!(
        run(&["/product/1", "/cart/add"]).break_point(),
        Some(BreakPoint::Cart)
    );
    assert_eq!(
        run(&["/product/1", "/checkout"]).break_point(),
        Some(BreakPoint::Browse)
    );
}

#[test]
fn later_browse_after_cart_does_not_regress() {
    let progress = run(&["/product/1", "/cart/add", "/product/2"]);

    assert_eq!(progress.break_point(), Some(BreakPoint::Cart));
}
