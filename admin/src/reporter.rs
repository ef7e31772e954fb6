//! [Reporter] implementations for standard types.

use crate::Reporter;

/// Forwards activity to the inner [Reporter], or drops it when there is none.
impl<R: Reporter> Reporter for Option<R> {
    type Activity = R::Activity;

    fn report(&mut self, activity: Self::Activity) {
        let Some(reporter) = self else {
            return;
        };
        reporter.report(activity);
    }
}
