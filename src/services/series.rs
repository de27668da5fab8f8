use super::{order_by_id, Resource, ResourceService};
use crate::models::{NewSeries, Series, SeriesChanges};

impl Resource for Series {
    const PATH: &'static str = "series";
    type Create = NewSeries;
    type Update = SeriesChanges;

    fn order(items: &mut [Self]) {
        order_by_id(items);
    }
}

pub type SeriesService = ResourceService<Series>;
