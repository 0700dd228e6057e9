#[macro_export]
macro_rules! index_id {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(index: usize) -> $name {
                $name(index as u32)
            }
            pub const fn index(self) -> usize {
                self.0 as usize
            }
            pub const fn as_u32(self) -> u32 {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> $name {
                $name::new(index)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> usize {
                id.index()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
