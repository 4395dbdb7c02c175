//! 分类索引 - 业务能力层
//!
//! 只负责 id → 名称 的映射，不关心题目

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CategoryId};

/// 分类索引
///
/// 入参按 id 升序，映射保持同样的顺序。序列化后即对外应答中的
/// `categories` 对象（id 作键、名称作值）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryIndex(BTreeMap<CategoryId, String>);

impl CategoryIndex {
    /// 宽松构建（允许为空），供删除后的状态汇报使用
    pub fn collect(categories: &[Category]) -> Self {
        Self(
            categories
                .iter()
                .map(|c| (c.id, c.label.clone()))
                .collect(),
        )
    }

    /// 构建索引，目录里没有任何分类时返回 NotFound
    ///
    /// 把"没有数据"与"查不到"合并为同一种对外表现，
    /// 是有意的产品决策（取舍记录在 DESIGN.md）。
    pub fn build(categories: &[Category]) -> CatalogResult<Self> {
        let index = Self::collect(categories);
        if index.is_empty() {
            return Err(CatalogError::NotFound);
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 按 id 取分类名称
    pub fn label(&self, id: CategoryId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }
}
