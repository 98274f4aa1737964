use crate::*;

#[cfg(test)]
#[path = "pricing_tests.rs"]
mod pricing_tests;

/// Price of one share `elapsed` seconds into an offering that starts at
/// `start_price` and reaches zero after `duration` seconds.
///
/// Declines linearly, `start_price - floor(start_price * elapsed / duration)`,
/// and is 0 from `elapsed >= duration` on. Never exceeds `start_price`.
pub fn compute_current_price(start_price: Balance, duration: u64, elapsed: u64) -> Balance {
    // must come before the division, duration may be 0
    if elapsed >= duration {
        return 0;
    }
    let duration = duration as u128;
    let elapsed = elapsed as u128;

    // start_price * elapsed can exceed u128, so split start_price = q * duration + r:
    // floor(start_price * elapsed / duration) = q * elapsed + floor(r * elapsed / duration)
    // q * elapsed <= start_price and r * elapsed < duration^2 <= 2^128
    let q = start_price / duration;
    let r = start_price % duration;
    let decrease = q * elapsed + r * elapsed / duration;

    start_price - decrease
}

// seconds since whitelisting, 0 if not whitelisted yet or if the clock is behind
pub fn elapsed_since(listed_on: u64, now: u64) -> u64 {
    if listed_on > 0 && now > listed_on {
        now - listed_on
    } else {
        0
    }
}

impl Meme {
    pub fn current_price(&self, now: u64) -> Balance {
        let elapsed = elapsed_since(self.lifecycle.whitelisted_on, now);
        compute_current_price(self.start_price, self.duration, elapsed)
    }
}
