use std::io::BufRead;

use ahash::AHashMap;
use ahash::AHashSet;
use anyhow::{anyhow, Context, Result};

use aoc_dsu::UnionFind;

/// A single gene from the puzzle input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    pub id: u32,
    pub bases: String,
}

impl Gene {
    /// Number of positions where both genes carry the same base.
    pub fn similarity(&self, other: &Gene) -> u64 {
        self.bases
            .bytes()
            .zip(other.bases.bytes())
            .filter(|(a, b)| a == b)
            .count() as u64
    }

    /// A gene can descend from a parent pair iff every one of its bases
    /// matches at least one parent at the same position.
    pub fn could_be_child_of(&self, parent1: &Gene, parent2: &Gene) -> bool {
        self.bases
            .bytes()
            .zip(parent1.bases.bytes().zip(parent2.bases.bytes()))
            .all(|(c, (x, y))| c == x || c == y)
    }
}

/// The full gene list of one puzzle input (lines of `id:bases`).
#[derive(Debug, Clone)]
pub struct GenePool {
    genes: AHashMap<u32, Gene>,
}

impl GenePool {
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut genes = AHashMap::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (id, bases) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("Missing ':' separator in line '{line}'"))?;
            let id: u32 = id
                .parse()
                .with_context(|| format!("Invalid gene id '{id}'"))?;

            genes.insert(
                id,
                Gene {
                    id,
                    bases: bases.to_string(),
                },
            );
        }

        Ok(Self { genes })
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// All (parent pair, children) relationships. Pairs are enumerated in
    /// ascending id order so the keys are deterministic across runs.
    fn relationships(&self) -> AHashMap<(u32, u32), AHashSet<u32>> {
        let mut ordered: Vec<&Gene> = self.genes.values().collect();
        ordered.sort_by_key(|gene| gene.id);

        let mut relationships: AHashMap<(u32, u32), AHashSet<u32>> = AHashMap::new();
        for child in &ordered {
            for (i, parent1) in ordered.iter().enumerate() {
                for parent2 in &ordered[i + 1..] {
                    if parent1.id == child.id || parent2.id == child.id {
                        continue;
                    }
                    if child.could_be_child_of(parent1, parent2) {
                        relationships
                            .entry((parent1.id, parent2.id))
                            .or_default()
                            .insert(child.id);
                    }
                }
            }
        }

        relationships
    }

    /// Parts 1 and 2: for every child, multiply its similarity to each
    /// parent and sum over all relationships.
    pub fn similarity_score(&self) -> u64 {
        let mut total = 0;
        for ((parent1, parent2), children) in self.relationships() {
            for child in children {
                total += self.genes[&parent1].similarity(&self.genes[&child])
                    * self.genes[&parent2].similarity(&self.genes[&child]);
            }
        }
        total
    }

    /// Part 3: union each parent pair and each parent-child link into
    /// families, then report the id sum of the family with the most
    /// members. Equal-sized families tie-break on the larger id sum.
    pub fn largest_family_score(&self) -> u64 {
        let mut families: UnionFind<u32> = UnionFind::new();

        for ((parent1, parent2), children) in self.relationships() {
            families.union(parent1, parent2);
            for child in children {
                families.union(parent1, child);
            }
        }

        // Genes without any relationship still count as singleton families.
        for &id in self.genes.keys() {
            families.find(id);
        }

        families
            .get_components()
            .into_iter()
            .map(|(_, members)| {
                let size = members.len();
                let score: u64 = members.into_iter().map(u64::from).sum();
                (size, score)
            })
            .max()
            .map(|(_, score)| score)
            .unwrap_or(0)
    }
}
