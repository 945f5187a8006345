//! End-to-end scenarios: import, classification, graph build, queries

use wikigraph::graph::LinkEdges;
use wikigraph::importer::VecSource;
use wikigraph::ontology::{Identifier, Ontology, Relation, PHYSICIST};
use wikigraph::pipeline::{Article, CollectingSink, OntologyBuilder};
use wikigraph::query::{render_path, FilterRegistry, GraphSet, QueryError, QuerySession, NO_PATH};
use wikigraph::{FilteredOntology, Graph};

fn chain_articles() -> Vec<Article> {
    vec![
        Article::new("A", "Links to [[B]]."),
        Article::new("B", "Links to [[C]]."),
        Article::new("C", "No outgoing links."),
    ]
}

fn build(articles: Vec<Article>) -> Ontology {
    let mut source = VecSource::new(articles);
    OntologyBuilder::standard().build(&mut source).unwrap()
}

fn session_over(articles: Vec<Article>) -> QuerySession {
    let ontology = build(articles);
    let registry = FilterRegistry::with_defaults();
    QuerySession::new(GraphSet::build_all(&ontology, &registry, &LinkEdges))
}

#[test]
fn path_query_over_link_chain() {
    let session = session_over(chain_articles());

    let result = session.run_line("all A C").unwrap();
    assert!(result.found);
    assert_eq!(result.length, 2);
    assert_eq!(
        render_path(&result),
        "***\nPath length: 2\nA\nB\nC\n***"
    );
}

#[test]
fn no_path_renders_the_literal_message() {
    let session = session_over(chain_articles());

    // links are directed; C has no outgoing edges
    let result = session.run_line("all C A").unwrap();
    assert!(!result.found);
    assert!(result.path.is_empty());
    assert_eq!(render_path(&result), format!("***\n{}\n***", NO_PATH));
}

#[test]
fn physicist_filter_includes_carriers_and_rejects_queries_on_others() {
    let mut articles = chain_articles();
    articles.push(Article::new(
        "E",
        "A physicist. [[F]] [[Category:Danish physicists]]",
    ));
    articles.push(Article::new("F", "Not a physicist. [[E]]"));

    let ontology = build(articles);
    let e = ontology.get(&Identifier::from("E")).unwrap();
    assert!(e.has_relation(&Relation::IsA(Identifier::from(PHYSICIST))));
    let f = ontology.get(&Identifier::from("F")).unwrap();
    assert!(!f.has_relation(&Relation::IsA(Identifier::from(PHYSICIST))));

    let registry = FilterRegistry::with_defaults();
    let session = QuerySession::new(GraphSet::build_all(&ontology, &registry, &LinkEdges));

    let result = session.run_line("physicist E E").unwrap();
    assert_eq!(result.length, 0);

    let err = session.run_line("physicist E F").unwrap_err();
    assert_eq!(
        err,
        QueryError::UnknownEntity {
            title: Identifier::from("F"),
            filter: "physicist".into(),
        }
    );
}

#[test]
fn all_filter_sees_every_entity() {
    let ontology = build(chain_articles());
    let registry = FilterRegistry::with_defaults();
    let all = registry.get("all").unwrap();
    let view = FilteredOntology::new(&ontology, all.as_ref());
    assert_eq!(view.iter().count(), ontology.len());

    let graph = Graph::build(&view, &LinkEdges);
    assert_eq!(graph.node_count(), ontology.len());
}

#[test]
fn rejected_articles_are_counted_and_absent() {
    let mut builder = OntologyBuilder::standard();
    builder.set_rejected_sink(CollectingSink::new());
    for article in [
        Article::new("Kept", "Body."),
        Article::new("Category:Dropped", "Body."),
        Article::new("Redirect", "#REDIRECT [[Kept]]"),
    ] {
        builder.consume(article);
    }

    assert_eq!(builder.rejected_count(), 2);
    let ontology = builder.finish();
    assert_eq!(ontology.len(), 1);
    assert!(ontology.contains(&Identifier::from("Kept")));
    assert!(!ontology.contains(&Identifier::from("Category:Dropped")));
    assert!(!ontology.contains(&Identifier::from("Redirect")));
}

#[test]
fn two_builds_from_the_same_sequence_are_identical() {
    let first = build(chain_articles());
    let second = build(chain_articles());

    assert_eq!(first.len(), second.len());
    for entity in first.iter() {
        let twin = second.get(entity.identifier()).expect("entity sets match");
        let a: Vec<&Relation> = entity.relations().collect();
        let b: Vec<&Relation> = twin.relations().collect();
        assert_eq!(a, b);
    }
}

#[test]
fn same_graph_serves_repeated_queries() {
    let session = session_over(chain_articles());
    for _ in 0..3 {
        let result = session.run_line("all A C").unwrap();
        assert_eq!(result.length, 2);
    }
}

#[test]
fn malformed_lines_are_recoverable() {
    let session = session_over(chain_articles());
    assert_eq!(session.run_line("all A").unwrap_err(), QueryError::Malformed);
    assert_eq!(
        session.run_line("all A B C").unwrap_err(),
        QueryError::Malformed
    );
    // the session still works afterwards
    assert!(session.run_line("all A C").is_ok());
}

#[test]
fn custom_filter_registration() {
    use std::sync::Arc;
    use wikigraph::query::RelationFilter;

    let ontology = build(chain_articles());
    let mut registry = FilterRegistry::with_defaults();
    registry.register(
        "links-to-c",
        Arc::new(RelationFilter::new(Relation::LinksTo(Identifier::from("C")))),
    );

    let session = QuerySession::new(GraphSet::build_all(&ontology, &registry, &LinkEdges));
    // only B links to C, so the graph is a single node
    let result = session.run_line("links-to-c B B").unwrap();
    assert_eq!(result.length, 0);
    assert!(matches!(
        session.run_line("links-to-c A B"),
        Err(QueryError::UnknownEntity { .. })
    ));
}
