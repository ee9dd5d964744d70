use crate::domain::model::{Choice, Record, SelectionState};
use std::collections::{BTreeMap, BTreeSet};

/// 單一 (make, model) 分組，`indices` 依檔案順序指向 `Dataset::records`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub make: String,
    pub model: String,
    indices: Vec<usize>,
}

impl Group {
    pub fn label(&self) -> String {
        format!("{} - {}", self.make, self.model)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// In-memory ratings table. Read-only once built; share it as `Arc<Dataset>`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    groups: Vec<Group>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        // BTreeMap 讓分組依 make、model 排序，顏色索引因此是確定的
        let mut grouped: BTreeMap<(String, String), Vec<usize>> = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            grouped
                .entry((record.make.clone(), record.model.clone()))
                .or_default()
                .push(index);
        }

        let groups = grouped
            .into_iter()
            .map(|((make, model), indices)| Group {
                make,
                model,
                indices,
            })
            .collect();

        Self { records, groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn group_records<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Record> + 'a {
        group.indices.iter().map(move |&i| &self.records[i])
    }

    /// 排序且去重的品牌列表
    pub fn makes(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.make.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 指定品牌下排序且去重的車型；`All` 回傳全部車型
    pub fn models(&self, make: &Choice) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| make.matches(&r.make))
            .map(|r| r.model.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 符合篩選條件的非缺值評分
    pub fn ratings<'a>(&'a self, selection: &'a SelectionState) -> impl Iterator<Item = f64> + 'a {
        self.records
            .iter()
            .filter(move |r| selection.matches(&r.make, &r.model))
            .filter_map(|r| r.rating.value())
    }
}
