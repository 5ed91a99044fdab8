//! One full render of the dashboard for a filter selection

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::{self, CategoryCount, SummaryStats, Timeline};
use crate::config::ExplorerConfig;
use crate::dataset::Dataset;
use crate::detail::{character_detail, character_names, CharacterDetail};
use crate::filter::{FilterOptions, FilterSet};
use crate::graph::{build_graph, RelationshipGraph};
use crate::record::CharacterRecord;

/// Every view the dashboard draws for one interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub filters: FilterSet,
    pub summary: SummaryStats,
    pub options: FilterOptions,
    /// Rows left after filtering
    pub matching_rows: usize,
    pub house_counts: Vec<CategoryCount>,
    pub culture_counts: Vec<CategoryCount>,
    pub timeline: Timeline,
    pub graph: RelationshipGraph,
    pub characters: Vec<String>,
    pub selected: Option<CharacterDetail>,
}

/// Recompute everything from the cached table.
///
/// The summary and selector options describe the whole table; every chart
/// uses the filtered view. When `selected` is missing or not in the view,
/// the first name in the picker is shown.
pub fn render_dashboard(
    dataset: &Dataset,
    filters: &FilterSet,
    selected: Option<&str>,
    config: &ExplorerConfig,
) -> DashboardView {
    let view: Vec<&CharacterRecord> = filters.apply(dataset.rows());
    let characters = character_names(&view);

    let selected_name = selected
        .filter(|name| characters.iter().any(|c| c.as_str() == *name))
        .or_else(|| characters.first().map(String::as_str));
    let selected = selected_name.and_then(|name| character_detail(&view, name));

    debug!(
        "Rendering dashboard: {} of {} rows match {:?}",
        view.len(),
        dataset.rows().len(),
        filters
    );

    DashboardView {
        filters: filters.clone(),
        summary: charts::summary(dataset.rows()),
        options: FilterOptions::from_rows(dataset.rows()),
        matching_rows: view.len(),
        house_counts: charts::house_counts(&view),
        culture_counts: charts::culture_counts(&view, config.top_cultures),
        timeline: charts::timeline(&view, dataset.events()),
        graph: build_graph(dataset.rows(), &view, config.edge_cap, config.sample_seed),
        characters,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EventMarker;

    fn dataset() -> Dataset {
        let rows = vec![
            CharacterRecord {
                house: Some("House Atreides".into()),
                book: Some("Dune".into()),
                detail: Some("Duke Leto (10140 AG - 10191 AG)".into()),
                relationship_target: Some("Paul".into()),
                relationship_type: Some("Parent".into()),
                ..CharacterRecord::new("Leto")
            },
            CharacterRecord {
                house: Some("House Atreides".into()),
                book: Some("Dune".into()),
                detail: Some("(10176 AG)".into()),
                ..CharacterRecord::new("Paul")
            },
            CharacterRecord {
                house: Some("House Harkonnen".into()),
                book: Some("Dune".into()),
                relationship_target: Some("Rabban".into()),
                relationship_type: Some("Uncle".into()),
                ..CharacterRecord::new("Vladimir Harkonnen")
            },
            CharacterRecord {
                book: Some("Dune Messiah".into()),
                ..CharacterRecord::new("Scytale")
            },
        ];
        let events = vec![EventMarker {
            year: 10191,
            label: "Fall of House Atreides".into(),
        }];
        Dataset::new(rows, events)
    }

    #[test]
    fn test_unfiltered_render() {
        let dataset = dataset();
        let view = render_dashboard(&dataset, &FilterSet::default(), None, &ExplorerConfig::default());

        assert_eq!(view.summary.total_characters, 4);
        assert_eq!(view.matching_rows, 4);
        assert_eq!(view.house_counts[0].label, "House Atreides");
        assert_eq!(view.timeline.bars.len(), 2);
        assert_eq!(view.timeline.events.len(), 1);
        assert_eq!(view.graph.edges.len(), 2);
        assert_eq!(view.options.books, vec!["Dune", "Dune Messiah"]);
        // Falls back to the first picker entry
        assert_eq!(view.selected.unwrap().name, "Leto");
    }

    #[test]
    fn test_filtered_render() {
        let dataset = dataset();
        let filters = FilterSet::from_labels(Some("Dune"), Some("House Atreides"), None);
        let view = render_dashboard(&dataset, &filters, Some("Paul"), &ExplorerConfig::default());

        assert_eq!(view.matching_rows, 2);
        assert_eq!(view.characters, vec!["Leto", "Paul"]);
        let paul = view.selected.unwrap();
        assert_eq!((paul.born, paul.died), (Some(10176), Some(10177)));
        assert_eq!(view.graph.edges.len(), 1);
        // Summary still reflects the whole table
        assert_eq!(view.summary.total_rows, 4);
    }

    #[test]
    fn test_selection_outside_view_falls_back() {
        let dataset = dataset();
        let filters = FilterSet::from_labels(None, Some("House Harkonnen"), None);
        let view = render_dashboard(&dataset, &filters, Some("Paul"), &ExplorerConfig::default());
        assert_eq!(view.selected.unwrap().name, "Vladimir Harkonnen");
    }

    #[test]
    fn test_empty_render() {
        let dataset = dataset();
        let filters = FilterSet::from_labels(Some("Dune Messiah"), Some("House Atreides"), None);
        let view = render_dashboard(&dataset, &filters, None, &ExplorerConfig::default());

        assert_eq!(view.matching_rows, 0);
        assert!(view.house_counts.is_empty());
        assert!(view.timeline.bars.is_empty());
        assert!(view.graph.nodes.is_empty());
        assert!(view.characters.is_empty());
        assert!(view.selected.is_none());
    }

    #[test]
    fn test_end_to_end_lifespan() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"Character,House_Allegiance,Born,Died,Detail\nLeto Atreides I,House Atreides,,,(10148 AG - 10191 AG)\n",
        )
        .unwrap();
        let config = ExplorerConfig {
            data_path: file.path().to_path_buf(),
            events_path: file.path().with_extension("missing"),
            ..ExplorerConfig::default()
        };

        let dataset = Dataset::load(&config).unwrap();
        let view = render_dashboard(&dataset, &FilterSet::default(), Some("Leto Atreides I"), &config);
        assert_eq!(view.selected.unwrap().lifespan, Some(43));
    }
}
