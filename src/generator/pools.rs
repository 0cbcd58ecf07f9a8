//! Candidate pools, one shape per family of modes.

use super::rng::{shuffle, shuffled, RandomSource};
use crate::model::{
    kun_stem, Example, HomophoneOption, Kanji, OkuriganaExample, PrintMode, Question,
    QuestionDetail, Relation, RelationFilter,
};
use std::collections::{HashMap, HashSet};

/// Homophone questions never offer more options than fit on one row.
pub const MAX_HOMOPHONE_OPTIONS: usize = 3;

/// Antonym selection gives up after this many passes over the pair list.
pub const MAX_RELATION_PASSES: usize = 10;

/// Kanji sharing one reading.
#[derive(Debug, Clone, PartialEq)]
pub struct HomophoneGroup<'a> {
    pub reading: String,
    /// First member, asked for in the question.
    pub target: &'a Kanji,
    pub options: Vec<HomophoneOption>,
}

/// Directed antonym or synonym link inside one grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelationPair<'a> {
    pub source: &'a Kanji,
    pub target: &'a Kanji,
    pub relation: Relation,
}

/// Everything a mode can draw from.
#[derive(Debug, Clone, PartialEq)]
pub enum Pool<'a> {
    Examples(Vec<(&'a Kanji, &'a Example)>),
    Homophones(Vec<HomophoneGroup<'a>>),
    Radicals(Vec<&'a Kanji>),
    Okurigana(Vec<(&'a Kanji, &'a OkuriganaExample)>),
    Relations(Vec<RelationPair<'a>>),
}

impl<'a> Pool<'a> {
    pub fn build(kanji: &[&'a Kanji], mode: PrintMode, filter: RelationFilter) -> Self {
        match mode {
            PrintMode::Reading
            | PrintMode::Writing
            | PrintMode::StrokeCount
            | PrintMode::StrokeOrder
            | PrintMode::Sentence => Pool::Examples(
                kanji
                    .iter()
                    .flat_map(|&k| k.examples.iter().map(move |e| (k, e)))
                    .collect(),
            ),
            PrintMode::Homophone => Pool::Homophones(homophone_groups(kanji)),
            PrintMode::Radical => {
                Pool::Radicals(kanji.iter().copied().filter(|k| k.radical.is_some()).collect())
            }
            PrintMode::Okurigana => Pool::Okurigana(
                kanji
                    .iter()
                    .flat_map(|&k| k.okurigana_examples.iter().map(move |o| (k, o)))
                    .collect(),
            ),
            PrintMode::Antonym => Pool::Relations(relation_pairs(kanji, filter)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Pool::Examples(p) => p.len(),
            Pool::Homophones(p) => p.len(),
            Pool::Radicals(p) => p.len(),
            Pool::Okurigana(p) => p.len(),
            Pool::Relations(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws `count` questions. May return fewer only for relation pools.
    pub fn select<R: RandomSource + ?Sized>(
        &self,
        count: usize,
        random: bool,
        rng: &mut R,
    ) -> Vec<Question> {
        match self {
            Pool::Examples(pool) => {
                let candidates: Vec<Question> = pool
                    .iter()
                    .map(|(k, e)| example_question(k, e, rng))
                    .collect();
                repeat_to_count(&candidates, count, random, rng)
            }
            Pool::Homophones(groups) => cycle(groups, count, random, rng)
                .into_iter()
                .map(|group| homophone_question(group, random, rng))
                .collect(),
            Pool::Radicals(pool) => cycle(pool, count, random, rng)
                .into_iter()
                .filter_map(radical_question)
                .collect(),
            Pool::Okurigana(pool) => cycle(pool, count, random, rng)
                .into_iter()
                .map(|(k, o)| okurigana_question(k, o))
                .collect(),
            Pool::Relations(pairs) => select_relations(pairs, count, random, rng)
                .into_iter()
                .map(relation_question)
                .collect(),
        }
    }
}

/// Groups kanji by reading, in first-seen order.
///
/// On readings are used as-is. Kun readings lose their okurigana part and a
/// kanji is listed at most once per kun stem.
pub fn homophone_index<'a>(kanji: &[&'a Kanji]) -> Vec<(String, Vec<&'a Kanji>)> {
    let mut groups: Vec<(String, Vec<&'a Kanji>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let mut slot = |reading: &str, groups: &mut Vec<(String, Vec<&'a Kanji>)>| -> usize {
        *positions.entry(reading.to_string()).or_insert_with(|| {
            groups.push((reading.to_string(), Vec::new()));
            groups.len() - 1
        })
    };

    for &k in kanji {
        for on in &k.readings.on {
            let i = slot(on, &mut groups);
            groups[i].1.push(k);
        }
        for kun in &k.readings.kun {
            let i = slot(kun_stem(kun), &mut groups);
            let members = &mut groups[i].1;
            if !members.iter().any(|m| m.character == k.character) {
                members.push(k);
            }
        }
    }

    groups
}

/// Readings shared by at least two kanji, trimmed to
/// [`MAX_HOMOPHONE_OPTIONS`] members.
pub fn homophone_groups<'a>(kanji: &[&'a Kanji]) -> Vec<HomophoneGroup<'a>> {
    homophone_index(kanji)
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .filter_map(|(reading, members)| {
            let target = *members.first()?;
            let options = members
                .iter()
                .take(MAX_HOMOPHONE_OPTIONS)
                .map(|m| HomophoneOption {
                    kanji: m.character.clone(),
                    context: m.context().to_string(),
                })
                .collect();
            Some(HomophoneGroup {
                reading,
                target,
                options,
            })
        })
        .collect()
}

/// Antonym and synonym links whose target is also in `kanji`.
pub fn relation_pairs<'a>(kanji: &[&'a Kanji], filter: RelationFilter) -> Vec<RelationPair<'a>> {
    let by_char: HashMap<&str, &'a Kanji> =
        kanji.iter().map(|&k| (k.character.as_str(), k)).collect();

    let mut pairs = Vec::new();
    for &source in kanji {
        let links = source
            .antonyms
            .iter()
            .map(|c| (c, Relation::Antonym))
            .chain(source.synonyms.iter().map(|c| (c, Relation::Synonym)));
        for (other, relation) in links {
            if let Some(&target) = by_char.get(other.as_str()) {
                pairs.push(RelationPair {
                    source,
                    target,
                    relation,
                });
            }
        }
    }

    pairs.retain(|p| filter.admits(p.relation));
    pairs
}

/// Shuffled copies (random) or the pool itself (ordered), repeated until
/// `count` is reached, then truncated.
fn repeat_to_count<T: Clone, R: RandomSource + ?Sized>(
    pool: &[T],
    count: usize,
    random: bool,
    rng: &mut R,
) -> Vec<T> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut selected = Vec::with_capacity(count + pool.len());
    while selected.len() < count {
        if random {
            selected.extend(shuffled(pool, rng));
        } else {
            selected.extend_from_slice(pool);
        }
    }
    selected.truncate(count);
    selected
}

/// Walks the pool in order, starting over (reshuffled when random) once it
/// runs out.
fn cycle<T: Clone, R: RandomSource + ?Sized>(
    pool: &[T],
    count: usize,
    random: bool,
    rng: &mut R,
) -> Vec<T> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut order = if random {
        shuffled(pool, rng)
    } else {
        pool.to_vec()
    };

    let mut selected = Vec::with_capacity(count);
    let mut index = 0;
    while selected.len() < count {
        selected.push(order[index].clone());
        index += 1;
        if index >= order.len() && selected.len() < count {
            index = 0;
            if random {
                shuffle(&mut order, rng);
            }
        }
    }
    selected
}

/// First pass skips the reverse of a pair already asked; later passes take
/// every pair. Stops after [`MAX_RELATION_PASSES`] passes even if short.
fn select_relations<'a, R: RandomSource + ?Sized>(
    pairs: &[RelationPair<'a>],
    count: usize,
    random: bool,
    rng: &mut R,
) -> Vec<RelationPair<'a>> {
    if pairs.is_empty() {
        return Vec::new();
    }

    let order = if random {
        shuffled(pairs, rng)
    } else {
        pairs.to_vec()
    };

    let mut used: HashSet<(&str, &str)> = HashSet::new();
    let mut selected = Vec::with_capacity(count);
    let mut index = 0;

    while selected.len() < count {
        let pair = order[index % order.len()];
        let forward = (pair.source.character.as_str(), pair.target.character.as_str());
        let backward = (forward.1, forward.0);

        if index >= order.len() {
            selected.push(pair);
        } else if !used.contains(&forward) && !used.contains(&backward) {
            used.insert(forward);
            selected.push(pair);
        }

        index += 1;
        if index > order.len() * MAX_RELATION_PASSES {
            break;
        }
    }

    selected.truncate(count);
    selected
}

fn example_question<R: RandomSource + ?Sized>(
    kanji: &Kanji,
    example: &Example,
    rng: &mut R,
) -> Question {
    let sentence = if kanji.sentences.is_empty() {
        None
    } else {
        kanji
            .sentences
            .get(rng.below(kanji.sentences.len()))
            .cloned()
    };

    Question {
        kanji: kanji.clone(),
        reading: example.reading.clone(),
        detail: QuestionDetail::Example {
            example: example.clone(),
            sentence,
        },
    }
}

fn homophone_question<R: RandomSource + ?Sized>(
    group: HomophoneGroup<'_>,
    random: bool,
    rng: &mut R,
) -> Question {
    let mut options = group.options;
    if random {
        shuffle(&mut options, rng);
    }

    Question {
        kanji: group.target.clone(),
        reading: group.reading.clone(),
        detail: QuestionDetail::Homophone {
            reading: group.reading,
            options,
        },
    }
}

fn radical_question(kanji: &Kanji) -> Option<Question> {
    let radical = kanji.radical.as_ref()?;
    Some(Question {
        kanji: kanji.clone(),
        reading: kanji.primary_reading().to_string(),
        detail: QuestionDetail::Radical {
            target_kanji: kanji.character.clone(),
            answer_radical: radical.character.clone(),
            answer_radical_name: radical.name.clone(),
        },
    })
}

fn okurigana_question(kanji: &Kanji, example: &OkuriganaExample) -> Question {
    Question {
        kanji: kanji.clone(),
        reading: example.reading.clone(),
        detail: QuestionDetail::Okurigana {
            stem: example.stem.clone(),
            answer: example.okurigana.clone(),
            full_word: example.word.clone(),
            hint: Some(example.reading.clone()),
        },
    }
}

fn relation_question(pair: RelationPair<'_>) -> Question {
    Question {
        kanji: pair.source.clone(),
        reading: pair.source.primary_reading().to_string(),
        detail: QuestionDetail::Antonym {
            relation: pair.relation,
            source_kanji: pair.source.character.clone(),
            answer_kanji: pair.target.character.clone(),
        },
    }
}
