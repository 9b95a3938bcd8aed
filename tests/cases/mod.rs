// Matches a result against a pattern, or compares it to an expected value.
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Some($($pattern:tt)*) }) => {
        match $result {
            Some($($pattern)*) => {},
            other => panic!("Expected Some({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("Expected None but got {:#?}", other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        let actual = $result;
        pretty_assertions::assert_eq!($expected, actual, "< expected / got >");
    };
}

// One test per case: casts `value` to each listed type and checks the outcome.
#[macro_export]
macro_rules! cast_case {
    (
        name: $name:ident,
        value: $value:expr,
        $($ty:ty: $expected:tt,)*
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_imports)]
            use mu::{cast, Value};

            let value: Value = $value;
            $(
                $crate::assert_case!(cast::<$ty>(&value), $expected);
            )*
        }
    };
}
