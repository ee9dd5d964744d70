use crate::core::dataset::Dataset;
use crate::domain::model::{Choice, SelectionState};

/// 算術平均；沒有任何值時回傳 `None`
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean rating of the records matching `selection`, ignoring missing ratings.
pub fn selection_mean(dataset: &Dataset, selection: &SelectionState) -> Option<f64> {
    mean(dataset.ratings(selection))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelAverage<'a> {
    pub model: &'a str,
    pub mean: Option<f64>,
}

/// 品牌下每個車型的平均評分，依車型名稱排序
pub fn model_averages<'a>(dataset: &'a Dataset, make: &str) -> Vec<ModelAverage<'a>> {
    dataset
        .models(&Choice::only(make))
        .into_iter()
        .map(|model| ModelAverage {
            model,
            mean: selection_mean(dataset, &SelectionState::new(make, model)),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extremes<'a> {
    pub best: ModelRank<'a>,
    pub worst: ModelRank<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelRank<'a> {
    pub model: &'a str,
    pub mean: f64,
}

/// Best and worst model by mean. Ties keep the first model in the given order;
/// models without any rating are skipped.
pub fn best_and_worst<'a>(averages: &[ModelAverage<'a>]) -> Option<Extremes<'a>> {
    let mut rated = averages.iter().filter_map(|a| {
        a.mean.map(|mean| ModelRank {
            model: a.model,
            mean,
        })
    });

    let first = rated.next()?;
    let (best, worst) = rated.fold((first, first), |(best, worst), rank| {
        (
            if rank.mean > best.mean { rank } else { best },
            if rank.mean < worst.mean { rank } else { worst },
        )
    });

    Some(Extremes { best, worst })
}
