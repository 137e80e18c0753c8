use super::{Real, TimeValue};
use forceplate_common::Trace;

/// Consecutive force steps smaller than this are treated as flat, so noise
/// does not end a decline early.
const DECLINE_NOISE_FLOOR: Real = 0.01;

/// Follows the signal forward from a retained maximum: first through its
/// decline (including near-flat stretches) to a local floor, then through
/// the subsequent rise, collecting points while they stay above the floor
/// value. Both walks stop at the end of the trace; a maximum at or next to
/// the final sample yields an empty tail.
pub(crate) fn trace_impulse_tail(trace: &Trace, peak_index: usize) -> Vec<TimeValue> {
    let times = trace.times();
    let forces = trace.forces();

    let mut decline = peak_index + 1;
    while let (Some(&current), Some(&next)) = (forces.get(decline), forces.get(decline + 1)) {
        if next < current || (next - current).abs() < DECLINE_NOISE_FLOOR {
            decline += 1;
        } else {
            break;
        }
    }

    let Some(&floor) = forces.get(decline) else {
        return Vec::new();
    };

    times
        .iter()
        .zip(forces.iter())
        .skip(decline + 1)
        .take_while(|&(_, &force)| force > floor)
        .map(|(&time, &value)| TimeValue { time, value })
        .collect()
}
