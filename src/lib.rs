//! 长度与容量分开记录的动态数组。
//!
//! 与 `Vec` 不同，容量是精确值：`update_capacity(n)` 成功后
//! `capacity() == n`，且容量只能单调增长。每个访问/修改操作都有
//! panic 和受检（返回 [`Result`]）两套入口，由调用方按场景选择。

pub mod error;
pub mod iter;

pub use error::{ArrayError, Result};
pub use iter::IntoIter;

use std::alloc::{alloc, dealloc, handle_alloc_error, realloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

/// 基于裸指针存储的动态数组，`len` 为已初始化前缀，`cap` 为已分配槽位数。
pub struct FlexArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: 只要 T 是 Send，FlexArray<T> 就可以跨线程转移所有权
unsafe impl<T: Send> Send for FlexArray<T> {}
// SAFETY: 只要 T 是 Sync，FlexArray<T> 就可以在多线程间共享引用
unsafe impl<T: Sync> Sync for FlexArray<T> {}

impl<T> FlexArray<T> {
    /// 创建一个空数组，不分配内存。
    pub fn new() -> Self {
        // 不支持零尺寸类型（ZST），精确容量对 ZST 没有意义
        assert!(mem::size_of::<T>() != 0, "Zero-sized types are not supported");
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// 创建长度为 0、容量恰好为 `capacity` 的数组。
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(mem::size_of::<T>() != 0, "Zero-sized types are not supported");
        if capacity == 0 {
            return Self::new();
        }

        let layout = Layout::array::<T>(capacity).expect("Capacity overflow");
        assert!(layout.size() <= isize::MAX as usize, "Allocation too large");

        let ptr = unsafe { alloc(layout) };
        let ptr = match NonNull::new(ptr as *mut T) {
            Some(p) => p,
            None => handle_alloc_error(layout),
        };

        Self {
            ptr,
            cap: capacity,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// 创建长度和容量均为 `len` 的数组，每个槽位为 `T::default()`。
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut arr = Self::with_capacity(len);
        for _ in 0..len {
            arr.push(T::default());
        }
        arr
    }

    /// 创建长度为 `len`（默认值填充）、容量恰好为 `capacity` 的数组。
    /// `capacity < len` 时返回 [`ArrayError::InvalidCapacity`]。
    pub fn with_len_and_capacity(len: usize, capacity: usize) -> Result<Self>
    where
        T: Default,
    {
        if capacity < len {
            return Err(ArrayError::InvalidCapacity);
        }

        let mut arr = Self::with_capacity(capacity);
        for _ in 0..len {
            arr.push(T::default());
        }
        Ok(arr)
    }

    /// 获取当前元素数量。
    pub fn len(&self) -> usize {
        self.len
    }

    /// 获取当前容量。
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// 数组是否为空。
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 数组是否至少含有一个元素。
    pub fn has_elements(&self) -> bool {
        !self.is_empty()
    }

    /// 末尾元素的下标，空数组时为 `None`。
    pub fn last_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// 返回下标 `index` 处元素的引用。
    ///
    /// # Panics
    /// `index >= len` 时 panic。
    pub fn get(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index out of bounds: {} >= {}",
            index,
            self.len
        );
        // SAFETY: index < len，该位置是有效的已初始化元素
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// 返回下标 `index` 处元素的可变引用。
    ///
    /// # Panics
    /// `index >= len` 时 panic。
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "index out of bounds: {} >= {}",
            index,
            self.len
        );
        // SAFETY: index < len，该位置是有效的已初始化元素
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// [`get`](Self::get) 的受检版本，越界时返回 [`ArrayError::OutOfBounds`]。
    pub fn get_safe(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(ArrayError::OutOfBounds);
        }
        Ok(self.get(index))
    }

    /// 返回首元素的引用，等价于 `get(0)`。
    pub fn first(&self) -> &T {
        self.get(0)
    }

    /// [`first`](Self::first) 的受检版本。
    pub fn first_safe(&self) -> Result<&T> {
        self.get_safe(0)
    }

    /// 返回末尾元素的引用。
    ///
    /// # Panics
    /// 空数组时 panic。
    pub fn last(&self) -> &T {
        assert!(self.len != 0, "last on empty array");
        self.get(self.len - 1)
    }

    /// [`last`](Self::last) 的受检版本，空数组时返回 [`ArrayError::OutOfBounds`]。
    pub fn last_safe(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(ArrayError::OutOfBounds);
        }
        self.get_safe(self.len - 1)
    }

    /// 在末尾添加元素，必要时按倍增策略扩容。
    pub fn push(&mut self, elem: T) {
        if self.len == self.cap {
            self.grow();
        }

        unsafe {
            // SAFETY: 我们已确保有足够的容量，且指针有效
            ptr::write(self.ptr.as_ptr().add(self.len), elem);
            // 异常安全：只有在写入成功后才增加 len
            self.len += 1;
        }
    }

    /// 依次克隆并追加切片中的全部元素。
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.reserve(values.len());
        for value in values {
            self.push(value.clone());
        }
    }

    /// 覆写下标 `index` 处的元素，旧元素在赋值时被析构。
    ///
    /// # Panics
    /// `index >= len` 时 panic。
    pub fn set(&mut self, index: usize, value: T) {
        *self.get_mut(index) = value;
    }

    /// [`set`](Self::set) 的受检版本，越界时返回 [`ArrayError::OutOfBounds`]。
    pub fn set_safe(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.len {
            return Err(ArrayError::OutOfBounds);
        }
        self.set(index, value);
        Ok(())
    }

    /// 移除并返回末尾元素。
    ///
    /// # Panics
    /// 空数组时 panic。
    pub fn pop(&mut self) -> T {
        assert!(self.len != 0, "pop on empty array");
        self.len -= 1;
        unsafe {
            // SAFETY: len 已减 1，该位置是有效的已初始化元素
            ptr::read(self.ptr.as_ptr().add(self.len))
        }
    }

    /// [`pop`](Self::pop) 的受检版本。空数组时返回
    /// [`ArrayError::OutOfBounds`]，长度保持为 0，不会下溢。
    pub fn pop_safe(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ArrayError::OutOfBounds);
        }
        Ok(self.pop())
    }

    /// 移除末尾元素但不返回它，元素就地析构。
    ///
    /// # Panics
    /// 空数组时 panic。
    pub fn pop_discard(&mut self) {
        assert!(self.len != 0, "pop on empty array");
        self.len -= 1;
        unsafe {
            // SAFETY: len 已减 1，该位置是有效的已初始化元素
            ptr::drop_in_place(self.ptr.as_ptr().add(self.len));
        }
    }

    /// 将容量更新为恰好 `new_cap` 个槽位。
    ///
    /// `new_cap < capacity` 时返回 [`ArrayError::CapacityDecrease`]，
    /// 状态不变；`new_cap == capacity` 时为无操作；否则重新分配存储，
    /// 按原顺序保留全部元素。
    pub fn update_capacity(&mut self, new_cap: usize) -> Result<()> {
        if new_cap < self.cap {
            return Err(ArrayError::CapacityDecrease);
        }
        if new_cap > self.cap {
            self.grow_to(new_cap);
        }
        Ok(())
    }

    /// 以切片视图访问全部元素。
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: 0..len 的槽位均已初始化；cap == 0 时 ptr 悬垂但 len 也为 0
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// 以可变切片视图访问全部元素。
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: 同 as_slice，且 &mut self 保证独占
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// 借用迭代器。
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// 可变借用迭代器。
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// 确保还能容纳 `additional` 个元素，不足时扩容到恰好所需大小。
    fn reserve(&mut self, additional: usize) {
        let required = self.len.checked_add(additional).expect("Capacity overflow");
        if required > self.cap {
            self.grow_to(required);
        }
    }

    fn grow(&mut self) {
        let new_cap = if self.cap == 0 { 1 } else { self.cap * 2 };
        self.grow_to(new_cap);
    }

    /// 将存储重新分配到恰好 `new_cap` 个槽位，保留全部已初始化元素。
    fn grow_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let new_layout = Layout::array::<T>(new_cap).expect("Capacity overflow");
        assert!(new_layout.size() <= isize::MAX as usize, "Allocation too large");

        let new_ptr = if self.cap == 0 {
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap).unwrap();
            unsafe { realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) }
        };

        self.ptr = match NonNull::new(new_ptr as *mut T) {
            Some(p) => p,
            None => handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }
}

impl<T> Drop for FlexArray<T> {
    fn drop(&mut self) {
        if self.cap != 0 {
            unsafe {
                // 1. 析构所有有效元素
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
                // 2. 释放内存块
                let layout = Layout::array::<T>(self.cap).unwrap();
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl<T> Default for FlexArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for FlexArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for FlexArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<T: Clone> Clone for FlexArray<T> {
    /// 克隆元素并保留精确容量。容量是本类型契约的一部分，
    /// 静默缩小会破坏 `update_capacity` 的单调性。
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.cap);
        cloned.extend_from_slice(self.as_slice());
        cloned
    }
}

// 相等性只比较元素，不比较容量
impl<T: PartialEq> PartialEq for FlexArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FlexArray<T> {}

impl<T> Extend<T> for FlexArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for FlexArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

/// 方括号包围、空格分隔的渲染，如 `[4 8 20 87]`；空数组为 `[]`。
impl<T: fmt::Display> fmt::Display for FlexArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", elem)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for FlexArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
