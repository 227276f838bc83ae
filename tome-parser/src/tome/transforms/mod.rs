//! Transform pipeline infrastructure
//!
//! Conversion is a chain of stages, each turning one intermediate shape into the
//! next. Stages implement [`Runnable`]; [`Transform`] wraps them so they can be
//! chained with [`Transform::then`], and the compiler checks that each stage's
//! input matches the previous stage's output:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(|lines: Vec<String>| lines)
//!     .then(PreambleParsing::new(rules.clone(), options))   // Vec<String> → Sectioned
//!     .then(ParagraphAssembly::new(rules.clone(), options)) // Sectioned → Draft
//!     .then(DuplicatePruning)                               // Draft → Draft
//!     .then(EmphasisAnnotation::new(rules));                // Draft → Draft
//! ```
//!
//! Unlike a static pipeline, every stage here is parameterised by a rule set, so
//! transforms are built per [`Converter`](crate::tome::converter::Converter) rather
//! than held in statics. A transform owns no per-document state, so one instance
//! may convert any number of documents, from any number of threads.
//!
//! Stages cannot fail. Every irregular input (short preambles, blank lines, an
//! unterminated final fragment) has a defined output, so `run` returns its output
//! directly.

pub mod stages;

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> O;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain `stage` after this transform, extending the output type to `O2`.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| stage.run(prev_run(input))),
        }
    }

    pub fn run(&self, input: I) -> O {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> O {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Uppercase;
    impl Runnable<String, String> for Uppercase {
        fn run(&self, input: String) -> String {
            input.to_uppercase()
        }
    }

    struct SplitWords;
    impl Runnable<String, Vec<String>> for SplitWords {
        fn run(&self, input: String) -> Vec<String> {
            input.split_whitespace().map(str::to_string).collect()
        }
    }

    fn identity() -> Transform<String, String> {
        Transform::from_fn(|s: String| s)
    }

    #[test]
    fn test_type_changing_chain() {
        let transform = identity().then(Uppercase).then(SplitWords);
        assert_eq!(
            transform.run("magic missile".to_string()),
            vec!["MAGIC", "MISSILE"]
        );
    }

    #[test]
    fn test_stages_run_in_chain_order() {
        let transform = identity()
            .then(Transform::from_fn(|s: String| format!("{s} ward")))
            .then(Uppercase);
        assert_eq!(transform.run("glyph of".to_string()), "GLYPH OF WARD");
    }

    #[test]
    fn test_transform_is_itself_a_stage() {
        let inner = identity().then(Uppercase);
        let outer = identity().then(inner).then(SplitWords);
        assert_eq!(outer.run("shield".to_string()), vec!["SHIELD"]);
    }
}
