use serde::Serialize;

/// Purchase funnel stages, in the order they must be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunnelStage {
    Browse,
    Cart,
    Checkout,
}

impl FunnelStage {
    pub fn of_path(path: &str) -> Option<Self> {
        if path.starts_with("/product/") {
            Some(FunnelStage::Browse)
        } else if path == "/cart/add" {
            Some(FunnelStage::Cart)
        } else if path == "/checkout" {
            Some(FunnelStage::Checkout)
        } else {
            None
        }
    }

    fn next(reached: Option<FunnelStage>) -> FunnelStage {
        match reached {
            None => FunnelStage::Browse,
            Some(FunnelStage::Browse) => FunnelStage::Cart,
            Some(FunnelStage::Cart | FunnelStage::Checkout) => FunnelStage::Checkout,
        }
    }
}

/// Last stage reached by a session that did not complete a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakPoint {
    None,
    Browse,
    Cart,
}

/// Tracks how far a time-ordered path sequence gets through the funnel.
///
/// Stages are matched as a subsequence: other paths may sit in between, and
/// a stage seen before its predecessor does not count.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunnelProgress {
    reached: Option<FunnelStage>,
}

impl FunnelProgress {
    pub fn observe(&mut self, path: &str) {
        if self.is_complete() {
            return;
        }
        if FunnelStage::of_path(path) == Some(FunnelStage::next(self.reached)) {
            self.reached = Some(FunnelStage::next(self.reached));
        }
    }

    pub fn is_complete(&self) -> bool {
        self.reached == Some(FunnelStage::Checkout)
    }

    pub fn break_point(&self) -> Option<BreakPoint> {
        match self.reached {
            None => Some(BreakPoint::None),
            Some(FunnelStage::Browse) => Some(BreakPoint::Browse),
            Some(FunnelStage::Cart) => Some(BreakPoint::Cart),
            Some(FunnelStage::Checkout) => None,
        }
    }
}
