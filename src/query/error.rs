/// Error indicating that a narrow-phase query could not produce a reliable answer.
///
/// None of these errors is fatal: they mean "could not resolve this pair for this frame".
/// Queries that simply found no contact, or no impact within the motion interval, return
/// `Ok(None)` instead.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The iterative algorithm exhausted its iteration budget.
    #[error("the iterative query did not converge within its iteration budget.")]
    NoConvergence,
    /// The simplex became affinely dependent and could not be used to locate the origin.
    #[error("the simplex degenerated and the query could not be resolved.")]
    DegenerateSimplex,
    /// The directional sampling and its refinement query produced no witness points.
    #[error("the penetration depth solver could not compute witness points.")]
    PenetrationSolverFailure,
    /// The shapes overlap and no penetration depth solver was available to measure the overlap.
    #[error("the shapes are penetrating and no penetration depth solver is configured.")]
    Penetrating,
    /// The shapes already overlap at the start of a continuous collision query.
    #[error("the shapes are already penetrating at the start of the motion.")]
    InitiallyPenetrating,
}
