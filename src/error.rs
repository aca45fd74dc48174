/// Error categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Perspective parameters that do not describe a view frustum.
    #[error("Degenerate projection: {0}")]
    DegenerateProjection(&'static str),

    /// Eye, target and up vectors that do not span a camera frame.
    #[error("Degenerate view: {0}")]
    DegenerateView(&'static str),

    /// Caller-supplied configuration outside its valid range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    // Projection errors
    pub fn near_not_positive() -> Self {
        Self::DegenerateProjection("near plane must be positive")
    }

    pub fn far_not_beyond_near() -> Self {
        Self::DegenerateProjection("far plane must lie beyond the near plane")
    }

    pub fn fov_out_of_range() -> Self {
        Self::DegenerateProjection("field of view must be within (0, 180) degrees")
    }

    pub fn aspect_not_positive() -> Self {
        Self::DegenerateProjection("aspect ratio must be positive")
    }

    pub fn projection_not_finite() -> Self {
        Self::DegenerateProjection("projection parameters must be finite")
    }

    // View errors
    pub fn eye_at_target() -> Self {
        Self::DegenerateView("eye and target coincide")
    }

    pub fn up_parallel_to_forward() -> Self {
        Self::DegenerateView("up vector is parallel to the view direction")
    }

    pub fn view_not_finite() -> Self {
        Self::DegenerateView("view parameters must be finite")
    }

    // Argument errors
    pub fn invalid_argument(name: &str, detail: &str) -> Self {
        Self::InvalidArgument(format!("{name}: {detail}"))
    }
}
