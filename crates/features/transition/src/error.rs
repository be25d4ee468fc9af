use std::borrow::Cow;

/// A specialized [`TransitionError`] enum of this crate.
///
/// None of these ever escape a running sequence: the sequencer logs them and
/// moves on. They surface only while bootstrapping a host.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    /// The host environment is missing a piece the sequencer relies on
    /// (no `window`, no `document`, no runtime).
    #[error("Host unavailable{}: {message}", format_context(.context))]
    HostUnavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A DOM call threw, or a region vanished from its document.
    #[error("DOM error{}: {message}", format_context(.context))]
    Dom { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The transition configuration cannot describe a valid sequence.
    #[error("Invalid transition configuration{}: {message}", format_context(.context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal transition error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait TransitionErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, TransitionError>;
}

impl<T> TransitionErrorExt<T> for Result<T, TransitionError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                TransitionError::HostUnavailable { context: c, .. }
                | TransitionError::Dom { context: c, .. }
                | TransitionError::InvalidConfig { context: c, .. }
                | TransitionError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<&'static str> for TransitionError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for TransitionError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_display() {
        let err: Result<(), TransitionError> = Err(TransitionError::Dom {
            message: "classList.add threw".into(),
            context: None,
        });
        let err = err.context("Applying hide marker").unwrap_err();
        assert_eq!(err.to_string(), "DOM error (Applying hide marker): classList.add threw");
    }

    #[test]
    fn strings_become_internal_errors() {
        let err = TransitionError::from("boom");
        assert!(matches!(err, TransitionError::Internal { context: None, .. }));
        assert_eq!(err.to_string(), "Internal transition error: boom");
    }
}
