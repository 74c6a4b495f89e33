/// Generates TryFrom impls from borrowed Sexp-likes into a Primitive variant's
/// payload. The Error type hands back the original value so callers can report
/// what they were actually given.
///
/// Example:
///   impl_try_from!(Number => Number);
macro_rules! impl_try_from {
    ($variant:ident => $to:ty) => {
        impl<'a> std::convert::TryFrom<&'a $crate::sexp::Sexp> for &'a $to {
            type Error = &'a $crate::sexp::Sexp;

            fn try_from(value: &'a $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive($crate::primitive::Primitive::$variant(val)) =
                    value
                {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }

        impl<'a> std::convert::TryFrom<Option<&'a $crate::sexp::HeapSexp>> for &'a $to {
            type Error = Option<&'a $crate::sexp::HeapSexp>;

            fn try_from(value: Option<&'a $crate::sexp::HeapSexp>) -> Result<Self, Self::Error> {
                if let Some(sexp) = value {
                    if let $crate::sexp::Sexp::Primitive(
                        $crate::primitive::Primitive::$variant(val),
                    ) = &**sexp
                    {
                        return Ok(val);
                    }
                }
                Err(value)
            }
        }

        impl From<$to> for $crate::sexp::Sexp {
            fn from(elem: $to) -> Self {
                $crate::sexp::Sexp::Primitive($crate::primitive::Primitive::$variant(elem))
            }
        }

        impl From<$to> for $crate::sexp::HeapSexp {
            fn from(elem: $to) -> Self {
                Self::new($crate::sexp::Sexp::from(elem))
            }
        }
    };
}
