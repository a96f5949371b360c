//! Lazy rewrite of one column across a stream of records.

use std::iter::FusedIterator;

use crate::{
    convert::ValueConverter,
    error::StreamError,
    value::{Record, Value},
};

/// Iterator adapter that converts `column` of every upstream record.
///
/// Each call to [`next`](Iterator::next) pulls exactly one upstream item.
/// An upstream `Err` is forwarded as [`StreamError::Upstream`] and ends the
/// stream; a conversion failure is emitted as [`StreamError::Convert`] and
/// the stream continues. Every emitted record is an owned value, so callers
/// may keep it across pulls.
pub struct EnumColumnTransform<I, C> {
    upstream: I,
    column: String,
    converter: C,
    done: bool,
}

impl<I, C> EnumColumnTransform<I, C> {
    pub fn new(upstream: I, column: impl Into<String>, converter: C) -> Self {
        Self {
            upstream,
            column: column.into(),
            converter,
            done: false,
        }
    }
}

impl<I, C, E> EnumColumnTransform<I, C>
where
    I: Iterator<Item = Result<Record, E>>,
    C: ValueConverter,
{
    fn map_record(&self, mut record: Record) -> Result<Record, StreamError<E>> {
        // An absent column converts as Null and is appended.
        let original = record.take(&self.column).unwrap_or(Value::Null);

        match self.converter.convert(&original) {
            Ok(mapped) => {
                record.insert(self.column.as_str(), mapped);
                Ok(record)
            }
            Err(source) => {
                record.insert(self.column.as_str(), Value::Null);
                Err(StreamError::Convert {
                    column: self.column.clone(),
                    record,
                    source,
                })
            }
        }
    }
}

impl<I, C, E> Iterator for EnumColumnTransform<I, C>
where
    I: Iterator<Item = Result<Record, E>>,
    C: ValueConverter,
{
    type Item = Result<Record, StreamError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.upstream.next() {
            None => {
                self.done = true;
                None
            }
            Some(Err(e)) => {
                self.done = true;
                Some(Err(StreamError::Upstream(e)))
            }
            Some(Ok(record)) => Some(self.map_record(record)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.upstream.size_hint().1)
        }
    }
}

impl<I, C, E> FusedIterator for EnumColumnTransform<I, C>
where
    I: Iterator<Item = Result<Record, E>>,
    C: ValueConverter,
{
}

/// Adds [`map_enum_column`](EnumColumnExt::map_enum_column) to record streams.
pub trait EnumColumnExt<E>: Iterator<Item = Result<Record, E>> + Sized {
    fn map_enum_column<C>(
        self,
        column: impl Into<String>,
        converter: C,
    ) -> EnumColumnTransform<Self, C>
    where
        C: ValueConverter,
    {
        EnumColumnTransform::new(self, column, converter)
    }
}

impl<I, E> EnumColumnExt<E> for I where I: Iterator<Item = Result<Record, E>> {}
