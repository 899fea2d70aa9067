use std::sync::atomic::{AtomicI32, Ordering};

use tracing::info;

use crate::AnyResult;

const LIMIT_LABEL: &str = "limit";

fn next_ticket() -> i32 {
    static SOME_NUM: AtomicI32 = AtomicI32::new(5);
    static LIMIT: i32 = 10;
    static_locals::track!(SOME_NUM);
    static_locals::track!(LIMIT, LIMIT_LABEL);
    SOME_NUM.fetch_add(1, Ordering::SeqCst)
}

/// Tracks an integer static, reads it back three ways, then rewinds it.
pub fn run() -> AnyResult<()> {
    let first = next_ticket();
    info!(first, "issued first ticket");

    let limit: i32 = static_locals::copy!(i32, "limit");
    let some_num = static_locals::get_ref!(AtomicI32, SOME_NUM);
    info!(
        next = some_num.load(Ordering::SeqCst),
        limit, "read static locals from outside next_ticket"
    );

    some_num.store(first, Ordering::SeqCst);
    let again = next_ticket();
    if again != first {
        return Err(format!(
            "rewinding SOME_NUM had no effect: expected ticket {first}, got {again}"
        ));
    }
    info!(again, "rewound the ticket counter through the live reference");

    if static_locals::get_named::<f32>("SOME_NUM").is_some() {
        return Err("SOME_NUM was handed out as an f32".to_owned());
    }
    info!("lookup as f32 was refused");
    Ok(())
}
