use std::{fmt, ops::Range};

use rb_tree::{interval_index::classify_point, NodeRef, RbTree, RbTreeError, TraversalOrder};

#[derive(Clone, Debug)]
struct Ruler {
    name: &'static str,
    title: &'static str,
    reign: Range<i32>,
}

impl Ruler {
    const fn king(name: &'static str, begin: i32, end: i32) -> Self {
        Self {
            name,
            title: "king",
            reign: begin..end,
        }
    }
}

impl fmt::Display for Ruler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Ruler]{{{} {}: {} - {}}}",
            self.title, self.name, self.reign.start, self.reign.end
        )
    }
}

const RULERS: [Ruler; 11] = [
    Ruler::king("Carloman II", 882, 884),
    Ruler::king("Charles II", 843, 877),
    Ruler::king("Charles III", 898, 922),
    Ruler::king("Charles the Fat", 884, 887),
    Ruler::king("Clovis I", 509, 511),
    Ruler::king("Louis II", 877, 879),
    Ruler::king("Louis III", 879, 882),
    Ruler::king("Odo", 888, 898),
    Ruler::king("Robert I", 922, 923),
    Ruler::king("Rudolph", 923, 936),
    Ruler::king("Theuderic I", 511, 534),
];

fn print_node(node: NodeRef<'_, Ruler>, depth: usize) {
    println!("{:indent$}{:?} {}", "", node.color(), node.payload(), indent = depth * 2);
}

fn main() {
    env_logger::init();

    let year = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i32>().ok())
        .unwrap_or(521);

    let mut tree: RbTree<Ruler, _> =
        RbTree::with_comparator(|a: &Ruler, b: &Ruler| a.reign.start.cmp(&b.reign.start));

    // alphabetical order, not reign order
    for ruler in RULERS {
        if let Err(e) = tree.insert(ruler.clone()) {
            log::warn!("skipping {}: {}", ruler, e);
        }
    }

    log::info!(
        "{} rulers, height {}, {} rotations ({:.2} per insert), {} recolors",
        tree.len(),
        tree.height(),
        tree.stats().rotations,
        tree.stats().rotations_per_insert(),
        tree.stats().recolors
    );

    for (label, order) in [
        ("pre", TraversalOrder::Pre),
        ("in", TraversalOrder::In),
        ("post", TraversalOrder::Post),
    ] {
        println!("{}", label);
        tree.traverse(order, print_node);
    }

    match tree.search(&year, |y, ruler| classify_point(y, &ruler.reign)) {
        Ok(ruler) => println!("ruling in {}: {}", year, ruler),
        Err(RbTreeError::NotFound) => println!("nobody recorded as ruling in {}", year),
        Err(e) => log::error!("lookup of {} failed: {}", year, e),
    }
}

#[cfg(test)]
mod tests {
    use super::RULERS;

    #[test]
    fn rulers_listed_alphabetically() {
        assert!(RULERS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn rulers_do_not_overlap() {
        let mut reigns: Vec<_> = RULERS.iter().map(|r| r.reign.clone()).collect();
        reigns.sort_by_key(|r| r.start);
        assert!(reigns.windows(2).all(|w| w[0].end <= w[1].start));
    }
}
