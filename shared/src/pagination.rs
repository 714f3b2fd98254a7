//! 分页响应
//!
//! One page of an ordered sequence, plus the metadata a pager needs.

use serde::{Deserialize, Serialize};

/// 分页响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// 数据列表
    pub data: Vec<T>,
    /// 总记录数
    pub total: u64,
    /// 当前页码 (从 1 开始)
    pub page: u32,
    /// 每页数量
    pub limit: u32,
    /// 总页数 (至少为 1)
    pub total_pages: u32,
    /// 本页第一条记录在整个序列中的偏移
    pub offset: u64,
}

impl<T> PaginatedResponse<T> {
    /// Cut page `page` (1-based) of size `limit` out of `items`.
    ///
    /// A page past the end yields an empty `data`; it is never an error.
    pub fn from_slice(items: &[T], page: u32, limit: u32) -> Self
    where
        T: Clone,
    {
        let total = items.len() as u64;
        let offset = u64::from(page.saturating_sub(1)) * u64::from(limit);
        let data = if offset >= total {
            Vec::new()
        } else {
            let start = offset as usize;
            let end = (start + limit as usize).min(items.len());
            items[start..end].to_vec()
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
            offset,
        }
    }

    /// Whether the underlying sequence is empty (not just this page)
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based row number of the `index`-th item on this page
    pub fn row_number(&self, index: usize) -> u64 {
        self.offset + index as u64 + 1
    }
}

/// `ceil(total / limit)`, never less than 1
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    total.div_ceil(u64::from(limit)).max(1) as u32
}
