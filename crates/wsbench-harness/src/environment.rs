// wsbench - Whitespace Collapse Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Best-effort scheduling setup before any timing begins.
//!
//! [`configure`] pins the process to one core, raises process and thread
//! priority, and reads the run seed from the monotonic clock. Every hint is
//! optional: when the platform refuses one, the refusal is logged at `debug`
//! level and the run continues with default scheduling. Nothing is restored
//! afterwards.
//!
//! On Linux nice values are per thread, so both priority hints land on the
//! calling thread; threads spawned later inherit it, existing ones do not.

use std::fmt;
use tracing::debug;

/// Seed read from the monotonic tick counter.
pub type Seed = u64;

/// Nice value requested for the process (highest non-realtime level).
pub const PROCESS_NICE: i32 = -20;

/// Nice value requested for the benchmarking thread.
pub const THREAD_NICE: i32 = -20;

/// What happened to one scheduling hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// The OS accepted the change.
    Applied,
    /// The OS refused the change; the payload is the OS error text.
    Denied(String),
    /// The platform has no way to express the hint.
    Unsupported,
    /// Environment preparation was turned off.
    Skipped,
}

impl HintOutcome {
    /// Returns whether the hint took effect.
    pub fn is_applied(&self) -> bool {
        matches!(self, HintOutcome::Applied)
    }
}

impl fmt::Display for HintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintOutcome::Applied => write!(f, "applied"),
            HintOutcome::Denied(reason) => write!(f, "denied ({})", reason),
            HintOutcome::Unsupported => write!(f, "unsupported"),
            HintOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Outcome of environment preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    /// Seed for the fixture suffix.
    pub seed: Seed,
    /// Processor affinity.
    pub affinity: HintOutcome,
    /// Process priority.
    pub process_priority: HintOutcome,
    /// Thread priority.
    pub thread_priority: HintOutcome,
}

/// Prepares the process for benchmarking and returns the seed.
///
/// With `pin_core == None` no scheduling attribute is touched.
pub fn configure(pin_core: Option<usize>) -> Seed {
    prepare(pin_core).seed
}

/// Like [`configure`], but also reports which hints took effect.
pub fn prepare(pin_core: Option<usize>) -> EnvironmentReport {
    let seed = monotonic_ticks();

    let report = match pin_core {
        Some(core) => EnvironmentReport {
            seed,
            affinity: soft(sys::pin_to_core(core), "processor affinity"),
            process_priority: soft(sys::raise_process_priority(), "process priority"),
            thread_priority: soft(sys::raise_thread_priority(), "thread priority"),
        },
        None => EnvironmentReport {
            seed,
            affinity: HintOutcome::Skipped,
            process_priority: HintOutcome::Skipped,
            thread_priority: HintOutcome::Skipped,
        },
    };

    debug!(
        seed = report.seed,
        affinity = %report.affinity,
        process_priority = %report.process_priority,
        thread_priority = %report.thread_priority,
        "environment prepared"
    );
    report
}

fn soft(outcome: HintOutcome, hint: &str) -> HintOutcome {
    if let HintOutcome::Denied(reason) = &outcome {
        debug!(hint, reason = %reason, "scheduling hint refused, continuing");
    }
    outcome
}

/// Reads the monotonic clock in nanoseconds.
pub fn monotonic_ticks() -> Seed {
    sys::monotonic_nanos()
}

#[cfg(target_os = "linux")]
mod sys {
    use super::{HintOutcome, PROCESS_NICE, THREAD_NICE};
    use std::io;

    fn outcome(rc: libc::c_int) -> HintOutcome {
        if rc == 0 {
            HintOutcome::Applied
        } else {
            HintOutcome::Denied(io::Error::last_os_error().to_string())
        }
    }

    pub(super) fn pin_to_core(core: usize) -> HintOutcome {
        if core >= libc::CPU_SETSIZE as usize {
            return HintOutcome::Denied(format!("core {} out of range", core));
        }
        // SAFETY: `set` is a plain bitmask owned by this frame and `core` is
        // below CPU_SETSIZE.
        let rc = unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
        };
        outcome(rc)
    }

    pub(super) fn raise_process_priority() -> HintOutcome {
        // SAFETY: plain syscall on the current process id.
        let rc = unsafe {
            libc::setpriority(libc::PRIO_PROCESS, libc::getpid() as libc::id_t, PROCESS_NICE)
        };
        outcome(rc)
    }

    pub(super) fn raise_thread_priority() -> HintOutcome {
        // On Linux the nice value is per thread; PRIO_PROCESS with a tid
        // targets just that thread.
        // SAFETY: gettid has no preconditions; setpriority takes plain ints.
        let rc = unsafe {
            let tid = libc::syscall(libc::SYS_gettid) as libc::id_t;
            libc::setpriority(libc::PRIO_PROCESS, tid, THREAD_NICE)
        };
        outcome(rc)
    }

    pub(super) fn monotonic_nanos() -> u64 {
        // SAFETY: an all-zero timespec is valid and `ts` outlives the call.
        let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
        if rc != 0 {
            return super::fallback_nanos();
        }
        (ts.tv_sec as u64)
            .wrapping_mul(1_000_000_000)
            .wrapping_add(ts.tv_nsec as u64)
    }
}

#[cfg(all(unix, not(target_os = "linux")))]
mod sys {
    use super::{HintOutcome, PROCESS_NICE};
    use std::io;

    pub(super) fn pin_to_core(_core: usize) -> HintOutcome {
        HintOutcome::Unsupported
    }

    pub(super) fn raise_process_priority() -> HintOutcome {
        // SAFETY: plain syscall; `0` names the calling process.
        let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, PROCESS_NICE) };
        if rc == 0 {
            HintOutcome::Applied
        } else {
            HintOutcome::Denied(io::Error::last_os_error().to_string())
        }
    }

    pub(super) fn raise_thread_priority() -> HintOutcome {
        HintOutcome::Unsupported
    }

    pub(super) fn monotonic_nanos() -> u64 {
        // SAFETY: an all-zero timespec is valid and `ts` outlives the call.
        let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
        if rc != 0 {
            return super::fallback_nanos();
        }
        (ts.tv_sec as u64)
            .wrapping_mul(1_000_000_000)
            .wrapping_add(ts.tv_nsec as u64)
    }
}

#[cfg(not(unix))]
mod sys {
    use super::HintOutcome;

    pub(super) fn pin_to_core(_core: usize) -> HintOutcome {
        HintOutcome::Unsupported
    }

    pub(super) fn raise_process_priority() -> HintOutcome {
        HintOutcome::Unsupported
    }

    pub(super) fn raise_thread_priority() -> HintOutcome {
        HintOutcome::Unsupported
    }

    pub(super) fn monotonic_nanos() -> u64 {
        super::fallback_nanos()
    }
}

fn fallback_nanos() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
