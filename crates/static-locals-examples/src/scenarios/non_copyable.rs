use std::sync::Mutex;

use tracing::info;

use crate::AnyResult;

/// Deliberately not `Clone`: `static_locals::copy!` will not accept it.
struct Session {
    id: u32,
    requests: Mutex<Vec<String>>,
}

fn handle(request: &str) -> usize {
    static SESSION: Session = Session {
        id: 5,
        requests: Mutex::new(Vec::new()),
    };
    static_locals::track!(SESSION);
    let mut requests = SESSION
        .requests
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    requests.push(request.to_owned());
    requests.len()
}

/// Tracks a non-`Clone` static and inspects it only by reference.
pub fn run() -> AnyResult<()> {
    handle("GET /");
    handle("GET /health");

    let session = static_locals::get_ref!(Session, SESSION);
    let seen = {
        let mut requests = session
            .requests
            .lock()
            .map_err(|_| "session mutex poisoned".to_owned())?;
        let seen = requests.len();
        requests.clear();
        seen
    };
    info!(id = session.id, seen, "inspected and reset the session");

    let after_reset = handle("GET /again");
    if after_reset != 1 {
        return Err(format!(
            "reset did not reach the static: {after_reset} requests recorded"
        ));
    }
    Ok(())
}
