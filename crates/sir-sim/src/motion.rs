//! Motion integrator.

use sir_agent::Agent;
use sir_core::Bounds;

/// Move `agent` one step and reflect its velocity at the walls.
///
/// The position is displaced first; an axis whose new coordinate lies
/// outside `[agent_radius, extent − agent_radius]` has its velocity
/// component negated.  The position itself is never clamped, so an agent may
/// sit up to one step past the inset wall until the next step carries it
/// back.
#[inline]
pub fn integrate(agent: &mut Agent, bounds: &Bounds) {
    agent.position += agent.velocity;

    if bounds.outside_x(agent.position.x) {
        agent.velocity.x = -agent.velocity.x;
    }
    if bounds.outside_y(agent.position.y) {
        agent.velocity.y = -agent.velocity.y;
    }
}
