/// Returns the maximum resident set size (RSS) of the current process
/// in megabytes.
///
/// Resource usage comes from the `getrusage` system call. The unit of
/// `ru_maxrss` varies by OS (kilobytes on Linux, bytes on macOS), so
/// the calculation adjusts accordingly.
///
/// # Example
/// ```rust, ignore
/// use gtf2tracks::max_mem_usage_mb;
///
/// let mem_usage = max_mem_usage_mb();
/// println!("Max memory usage: {:.2} MB", mem_usage);
/// ```
pub fn max_mem_usage_mb() -> f64 {
    let rusage = unsafe {
        let mut rusage = std::mem::MaybeUninit::uninit();
        libc::getrusage(libc::RUSAGE_SELF, rusage.as_mut_ptr());
        rusage.assume_init()
    };
    let maxrss = rusage.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        maxrss / 1024.0 / 1024.0
    } else {
        maxrss / 1024.0
    }
}
