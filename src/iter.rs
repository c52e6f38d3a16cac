//! [`FlexArray`] 的所有权迭代器。

use std::alloc::{dealloc, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::FlexArray;

/// 按值迭代的迭代器。未消费的元素与底层存储在析构时一并释放。
pub struct IntoIter<T> {
    ptr: NonNull<T>,
    cap: usize,
    start: *const T,
    end: *const T,
    _marker: PhantomData<T>,
}

impl<T> IntoIterator for FlexArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let ptr = self.ptr;
        let cap = self.cap;
        let len = self.len;

        // 关键：避免 FlexArray 的 Drop 被调用
        mem::forget(self);

        let start = ptr.as_ptr();
        let end = unsafe { start.add(len) };

        IntoIter {
            ptr,
            cap,
            start,
            end,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            unsafe {
                let result = ptr::read(self.start);
                self.start = self.start.add(1);
                Some(result)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end as usize - self.start as usize) / mem::size_of::<T>();
        (len, Some(len))
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        if self.cap != 0 {
            unsafe {
                // 1. 析构剩余未消费的元素
                let remaining_len =
                    (self.end as usize - self.start as usize) / mem::size_of::<T>();
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.start as *mut T,
                    remaining_len,
                ));

                // 2. 释放内存块
                let layout = Layout::array::<T>(self.cap).unwrap();
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

// 借用迭代器
impl<'a, T> IntoIterator for &'a FlexArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FlexArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
