//! # Internal Macros
//!
//! Codegen for the typed vector façades. Every fixed-width vector exposes
//! the same operation set over a different element type; these macros
//! stamp out the per-type surface so the semantics live once, in
//! `vector::base`.
//!
//! ## declare_holders!
//!
//! Generates the by-value holder pair for one element type:
//!
//! ```ignore
//! declare_holders!(Int, i32);
//! // Generates:
//! // pub struct IntHolder { pub value: i32 }
//! // pub struct NullableIntHolder { pub is_set: i32, pub value: i32 }
//! ```
//!
//! ## fixed_width_vector!
//!
//! Generates a complete typed façade over `VectorBody`: constructors,
//! getters, holder plumbing, safe and non-safe setters, plus the
//! `ValueVector` and `FixedWidthVector` impls.
//!
//! ```ignore
//! fixed_width_vector!(IntVector, Int, i32, MinorType::Int, i32, raw);
//! ```
//!
//! The last two arguments pick the object form returned by `get_object`
//! and the conversion from the native value to it (`raw` is identity).

/// Generates the `{value}` and `{is_set, value}` holder structs for one
/// element type.
#[macro_export]
macro_rules! declare_holders {
    ($prefix:ident, $native:ty) => {
        ::paste::paste! {
            /// By-value holder for a known-set element.
            #[derive(Debug, Clone, Copy, PartialEq, Default)]
            pub struct [<$prefix Holder>] {
                pub value: $native,
            }

            /// By-value holder for an optional element. `is_set` follows
            /// the wire convention: 1 = set, 0 = null; negative values are
            /// rejected by setters.
            #[derive(Debug, Clone, Copy, PartialEq, Default)]
            pub struct [<Nullable $prefix Holder>] {
                pub is_set: i32,
                pub value: $native,
            }
        }
    };
}

/// Implements the object-safe `ValueVector` surface by delegation to the
/// façade's `body` field.
#[macro_export]
macro_rules! impl_value_vector {
    ($vector:ty) => {
        impl $crate::vector::ValueVector for $vector {
            fn field(&self) -> &$crate::types::Field {
                self.body.field()
            }

            fn minor_type(&self) -> $crate::types::MinorType {
                self.body.field().minor_type()
            }

            fn allocate_new(&mut self) -> ::eyre::Result<()> {
                self.body.allocate_new()
            }

            fn allocate_with_capacity(&mut self, capacity: usize) -> ::eyre::Result<()> {
                self.body.allocate_with_capacity(capacity)
            }

            fn set_initial_capacity(&mut self, capacity: usize) -> ::eyre::Result<()> {
                self.body.set_initial_capacity(capacity)
            }

            fn value_capacity(&self) -> usize {
                self.body.value_capacity()
            }

            fn value_count(&self) -> usize {
                self.body.value_count()
            }

            fn set_value_count(&mut self, count: usize) -> ::eyre::Result<()> {
                self.body.set_value_count(count)
            }

            fn is_set(&self, index: usize) -> bool {
                self.body.is_set(index)
            }

            fn null_count(&self) -> usize {
                self.body.null_count()
            }

            fn buffer_size(&self) -> usize {
                self.body.buffer_size()
            }

            fn buffer_size_for(&self, count: usize) -> usize {
                self.body.buffer_size_for(count)
            }

            fn field_buffers(&self) -> ::smallvec::SmallVec<[&$crate::memory::ByteBuffer; 2]> {
                self.body.field_buffers()
            }

            fn clear(&mut self) {
                self.body.clear()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}

/// Implements the same-type transfer surface by delegation to `body`.
#[macro_export]
macro_rules! impl_fixed_width_ops {
    ($vector:ty) => {
        impl $crate::vector::FixedWidthVector for $vector {
            fn new_sibling(
                &self,
                name: &str,
                allocator: &$crate::memory::BufferAllocator,
            ) -> Self {
                Self {
                    body: $crate::vector::base::VectorBody::new(
                        self.body.field().with_name(name),
                        allocator.clone(),
                    ),
                }
            }

            fn transfer_to(&mut self, target: &mut Self) -> ::eyre::Result<()> {
                self.body.transfer_to(&mut target.body)
            }

            fn split_and_transfer_to(
                &self,
                start: usize,
                length: usize,
                target: &mut Self,
            ) -> ::eyre::Result<()> {
                self.body.split_and_transfer_to(start, length, &mut target.body)
            }

            fn copy_from(
                &mut self,
                from: &Self,
                from_index: usize,
                to_index: usize,
            ) -> ::eyre::Result<()> {
                self.body.copy_from(&from.body, from_index, to_index)
            }

            fn copy_from_safe(
                &mut self,
                from: &Self,
                from_index: usize,
                to_index: usize,
            ) -> ::eyre::Result<()> {
                self.body.copy_from_safe(&from.body, from_index, to_index)
            }
        }
    };
}

/// Generates a typed fixed-width vector façade.
#[macro_export]
macro_rules! fixed_width_vector {
    (
        $(#[$meta:meta])*
        $vector:ident, $prefix:ident, $native:ty, $minor:expr, $object:ty, $convert:path
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $vector {
                body: $crate::vector::base::VectorBody,
            }

            impl $vector {
                /// Creates an empty vector; `allocate_new` must run before
                /// the first write.
                pub fn new(name: &str, allocator: &$crate::memory::BufferAllocator) -> Self {
                    Self {
                        body: $crate::vector::base::VectorBody::new(
                            $crate::types::Field::new(name, $minor),
                            allocator.clone(),
                        ),
                    }
                }

                /// Fails with `NullValue` when the slot's validity bit is 0.
                pub fn get(&self, index: usize) -> ::eyre::Result<$native> {
                    self.body.get_value::<$native>(index)
                }

                /// Owned object form; `None` for a null slot.
                pub fn get_object(&self, index: usize) -> Option<$object> {
                    self.body.value_or_null::<$native>(index).and_then($convert)
                }

                pub fn get_holder(&self, index: usize, holder: &mut [<Nullable $prefix Holder>]) {
                    match self.body.value_or_null::<$native>(index) {
                        Some(value) => {
                            holder.is_set = 1;
                            holder.value = value;
                        }
                        None => holder.is_set = 0,
                    }
                }

                /// Non-growing write; fails with `IndexOutOfBounds` past the
                /// current value capacity.
                pub fn set(&mut self, index: usize, value: $native) -> ::eyre::Result<()> {
                    self.body.set_value(index, value)
                }

                /// Growing write: doubles capacity until `index` fits.
                pub fn set_safe(&mut self, index: usize, value: $native) -> ::eyre::Result<()> {
                    self.body.handle_safe(index)?;
                    self.body.set_value(index, value)
                }

                pub fn set_null(&mut self, index: usize) -> ::eyre::Result<()> {
                    self.body.set_null(index)
                }

                pub fn set_holder(
                    &mut self,
                    index: usize,
                    holder: &[<$prefix Holder>],
                ) -> ::eyre::Result<()> {
                    self.body.set_value(index, holder.value)
                }

                pub fn set_holder_safe(
                    &mut self,
                    index: usize,
                    holder: &[<$prefix Holder>],
                ) -> ::eyre::Result<()> {
                    self.body.handle_safe(index)?;
                    self.body.set_value(index, holder.value)
                }

                /// Rejects `is_set < 0`; `is_set == 0` clears the slot.
                pub fn set_nullable(
                    &mut self,
                    index: usize,
                    holder: &[<Nullable $prefix Holder>],
                ) -> ::eyre::Result<()> {
                    self.set_parts(index, holder.is_set, holder.value)
                }

                pub fn set_nullable_safe(
                    &mut self,
                    index: usize,
                    holder: &[<Nullable $prefix Holder>],
                ) -> ::eyre::Result<()> {
                    self.body.handle_safe(index)?;
                    self.set_parts(index, holder.is_set, holder.value)
                }

                /// Disjoint form of the nullable-holder setter.
                pub fn set_parts(
                    &mut self,
                    index: usize,
                    is_set: i32,
                    value: $native,
                ) -> ::eyre::Result<()> {
                    if is_set < 0 {
                        ::eyre::bail!($crate::error::VectorError::InvalidArgument(format!(
                            "holder is_set must be non-negative, got {is_set}"
                        )));
                    }
                    if is_set > 0 {
                        self.body.set_value(index, value)
                    } else {
                        self.body.clear_validity(index)
                    }
                }

                pub fn set_parts_safe(
                    &mut self,
                    index: usize,
                    is_set: i32,
                    value: $native,
                ) -> ::eyre::Result<()> {
                    self.body.handle_safe(index)?;
                    self.set_parts(index, is_set, value)
                }

                /// Cursor over the logical length in object form.
                pub fn iter(&self) -> impl Iterator<Item = Option<$object>> + '_ {
                    (0..self.body.value_count()).map(move |index| self.get_object(index))
                }
            }

            $crate::impl_value_vector!($vector);
            $crate::impl_fixed_width_ops!($vector);
        }
    };
}
