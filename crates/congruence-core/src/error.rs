// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// The error type of the factorization engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactorizationError {
    /// Only positive integers have a prime factorization.
    #[error("cannot factorize {value}: argument must be positive")]
    InvalidArgument {
        /// The rejected argument, rendered in decimal.
        value: String,
    },
}

impl FactorizationError {
    /// Creates an `InvalidArgument` error for the given value.
    #[inline]
    pub fn invalid_argument<T>(value: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self::InvalidArgument {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FactorizationError;

    #[test]
    fn test_invalid_argument_display() {
        let err = FactorizationError::invalid_argument(-5i64);
        assert_eq!(
            err.to_string(),
            "cannot factorize -5: argument must be positive"
        );
    }
}
