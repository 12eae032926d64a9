use std::time::Duration;

use log::debug;

/// Most ticks a single update may run. Anything beyond is dropped.
pub const MAX_CATCH_UP: u32 = 3;

/// Turns variable frame deltas into whole game ticks.
#[derive(Debug)]
pub struct Ticker {
    delay: f64,
    acc: f64,
}

impl Ticker {
    pub fn new(delay: Duration) -> Ticker {
        Ticker { delay: delay.as_secs_f64(), acc: 0.0 }
    }

    /// Adds `dt` seconds and returns how many ticks are due.
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.acc += dt.max(0.0);
        let due = (self.acc / self.delay).floor();
        self.acc -= due * self.delay;

        let due = due as u32;
        if due > MAX_CATCH_UP {
            debug!("Dropping {} late ticks", due - MAX_CATCH_UP);
            return MAX_CATCH_UP;
        }
        due
    }

    pub fn reset(&mut self) {
        self.acc = 0.0;
    }
}
