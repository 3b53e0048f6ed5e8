use std::env;
use std::sync::OnceLock;

#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
const THREAD_ENV: &str = "NUMRS_CPU_THREADS";
const DISABLE_ENV: &str = "NUMRS_DISABLE_PARALLEL";
const MIN_ELEMS_ENV: &str = "NUMRS_PARALLEL_MIN_ELEMS";

const DEFAULT_MIN_ELEMS: usize = 64 * 64;

#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
static THREAD_OVERRIDE: OnceLock<Option<usize>> = OnceLock::new();
static DISABLE_PARALLEL: OnceLock<bool> = OnceLock::new();
static MIN_ELEMENTS: OnceLock<usize> = OnceLock::new();

#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub fn thread_override() -> Option<usize> {
    *THREAD_OVERRIDE.get_or_init(|| env::var(THREAD_ENV).ok().and_then(|raw| parse_threads(&raw)))
}

pub fn parallel_disabled() -> bool {
    *DISABLE_PARALLEL.get_or_init(|| env::var(DISABLE_ENV).ok().is_some_and(|raw| parse_flag(&raw)))
}

fn min_elements_threshold() -> usize {
    *MIN_ELEMENTS.get_or_init(|| {
        env::var(MIN_ELEMS_ENV)
            .ok()
            .and_then(|raw| parse_positive(&raw))
            .unwrap_or(DEFAULT_MIN_ELEMS)
    })
}

/// Whether reducing `lanes` lanes of `lane_len` elements each is worth
/// spreading over the rayon pool. Always false without the `parallel` feature.
pub fn should_parallelize(lanes: usize, lane_len: usize) -> bool {
    if !cfg!(feature = "parallel") || parallel_disabled() || lanes < 2 {
        return false;
    }
    lanes.saturating_mul(lane_len) >= min_elements_threshold()
}

fn parse_threads(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&value| value > 0)
}

#[cfg(feature = "parallel")]
use std::sync::Once;

#[cfg(feature = "parallel")]
static INIT_RAYON: Once = Once::new();

#[cfg(feature = "parallel")]
pub fn ensure_rayon_pool() {
    use rayon::ThreadPoolBuilder;
    INIT_RAYON.call_once(|| {
        let builder = match thread_override() {
            Some(threads) => ThreadPoolBuilder::new().num_threads(threads),
            None => ThreadPoolBuilder::new(),
        };
        // The global pool may already exist if the host application built it.
        if let Err(err) = builder.build_global() {
            log::debug!("rayon global pool left as configured by host: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_override_ignores_zero_and_garbage() {
        assert_eq!(parse_threads("4"), Some(4));
        assert_eq!(parse_threads(" 2 "), Some(2));
        assert_eq!(parse_threads("0"), None);
        assert_eq!(parse_threads("many"), None);
        assert_eq!(parse_threads(""), None);
    }

    #[test]
    fn disable_flag_accepts_common_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }

    #[test]
    fn thresholds_must_be_positive() {
        assert_eq!(parse_positive("128"), Some(128));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
    }

    #[test]
    fn single_lane_never_parallelizes() {
        assert!(!should_parallelize(1, usize::MAX));
    }
}
