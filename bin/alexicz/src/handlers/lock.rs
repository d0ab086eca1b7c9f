use alexa::{response_with_properties, Directive, Envelope, Namespace, PropertyName, PropertyState};

use crate::{Bridge, Endpoint, Result};

use super::log_request;

fn lock_state(directive: &Directive, state: &str) -> Envelope {
    response_with_properties(
        directive,
        vec![PropertyState::new(
            Namespace::LockController,
            PropertyName::LockState,
            state,
        )],
    )
}

pub async fn lock(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.lock(bridge.backend()).await?;

    Ok(lock_state(directive, "LOCKED"))
}

pub async fn unlock(bridge: &Bridge, directive: &Directive) -> Result<Envelope> {
    log_request(directive);

    let endpoint = Endpoint::from_directive(directive)?;
    endpoint.unlock(bridge.backend()).await?;

    Ok(lock_state(directive, "UNLOCKED"))
}
