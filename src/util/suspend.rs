use core::time::Duration;
use std::thread::sleep;

use tracing::warn;

/**
   Suspend the current thread forever, keeping the spawned chains and
   relayer running so that the operator can inspect them. Enabled by
   setting `HANG_ON_FAIL=1` in the environment.
*/
pub fn suspend<R>() -> R {
    warn!("suspending the harness indefinitely; spawned processes stay alive for inspection");

    loop {
        sleep(Duration::from_secs(999_999_999));
    }
}
