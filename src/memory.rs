/// Returns the peak resident set size (RSS) of the current process in
/// megabytes, as reported by `getrusage`.
///
/// `ru_maxrss` is in kilobytes on Linux and bytes on macOS, so the
/// conversion differs per target.
pub fn max_mem_usage_mb() -> f64 {
    let usage = unsafe {
        let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
        libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr());
        usage.assume_init()
    };

    let maxrss = usage.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        maxrss / 1024.0 / 1024.0
    } else {
        maxrss / 1024.0
    }
}
