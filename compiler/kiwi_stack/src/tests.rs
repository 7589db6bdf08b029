use super::*;

#[test]
fn passes_through_return_value() {
    assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
}

#[test]
fn passes_through_results() {
    let ok: Result<&str, ()> = ensure_sufficient_stack(|| Ok("fine"));
    assert_eq!(ok, Ok("fine"));
}

#[test]
fn survives_recursion_deeper_than_the_thread_stack() {
    // Each level carries a 1 KiB buffer, so 50k levels need ~50 MiB of
    // stack: far beyond the default 8 MiB.
    fn sum_down(n: u64) -> u64 {
        ensure_sufficient_stack(|| {
            let pad = [n as u8; 1024];
            if n == 0 {
                u64::from(pad[0])
            } else {
                n + sum_down(n - 1) + u64::from(pad[1023]) - u64::from(pad[0])
            }
        })
    }

    assert_eq!(sum_down(50_000), 50_000 * 50_001 / 2);
}

#[test]
fn runs_on_a_dedicated_stack() {
    // 4k levels of 4 KiB frames with no per-level growth: ~16 MiB, more
    // than a test thread has.
    fn depth(n: u32) -> u32 {
        let pad = [n as u8; 4096];
        if n == 0 {
            u32::from(pad[0])
        } else {
            1 + depth(n - 1) + u32::from(pad[4095]) - u32::from(pad[0])
        }
    }

    assert_eq!(with_stack_size(64 * 1024 * 1024, || depth(4096)), 4096);
}
