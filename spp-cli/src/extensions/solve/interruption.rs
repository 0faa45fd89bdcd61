//! Interruption handler.

use spp_core::utils::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// The process wide interruption flag: a handler can be installed only once per process.
static INTERRUPTION_FLAG: OnceLock<Result<Arc<AtomicBool>, String>> = OnceLock::new();

/// Creates a quota which is reached on Ctrl-C or when optional time limit (in seconds) is exceeded.
pub fn create_interruption_quota(max_time: Option<usize>) -> GenericResult<Arc<dyn Quota + Send + Sync>> {
    let inner = max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as f64)));
    let should_interrupt = get_interruption_flag()?;

    Ok(Arc::new(InterruptionQuota { inner, should_interrupt }))
}

fn get_interruption_flag() -> GenericResult<Arc<AtomicBool>> {
    INTERRUPTION_FLAG
        .get_or_init(|| {
            let should_interrupt = Arc::new(AtomicBool::new(false));

            ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || {
                    should_interrupt.store(true, Ordering::Relaxed);
                }
            })
            .map(|_| should_interrupt)
            .map_err(|err| format!("cannot set interruption handler: '{err}'"))
        })
        .clone()
        .map_err(GenericError::from)
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.should_interrupt.load(Ordering::Relaxed)
    }
}
