// SPDX-License-Identifier: MIT

use freqdict::{Backend, PrefixDictionary, WordFrequency, elapsed_secs, now};
use tracing::{info, info_span};

const SAMPLE: &[(&str, u64)] = &[
	("the", 5_627_187),
	("there", 1_190_398),
	("their", 1_006_538),
	("then", 672_134),
	("they", 1_827_212),
	("cat", 28_921),
	("car", 75_431),
	("cart", 6_021),
	("care", 85_119),
	("dog", 37_652),
	("dodge", 3_412),
	("door", 91_234),
];

fn run(dict: &mut dyn PrefixDictionary, entries: &[WordFrequency]) -> anyhow::Result<()> {
	let _span = info_span!("backend", name = dict.name()).entered();

	dict.build(entries.to_vec());

	for word in ["car", "ca", "door"] {
		let t0 = now();
		let frequency = dict.search(word)?;
		info!("search {word:?} = {frequency} in {:.6}s", elapsed_secs(&t0));
	}

	let added = dict.add(WordFrequency::new("cat", 1)?);
	info!("add \"cat\" = {added}, search = {}", dict.search("cat")?);
	let added = dict.add(WordFrequency::new("theory", 402_118)?);
	info!("add \"theory\" = {added}");

	for prefix in ["the", "car", "do", "x"] {
		let t0 = now();
		let suggestions = dict.autocomplete(prefix);
		let words: Vec<String> = suggestions.iter().map(ToString::to_string).collect();
		info!(
			"autocomplete {prefix:?} = {words:?} in {:.6}s",
			elapsed_secs(&t0)
		);
	}

	let deleted = dict.delete("car")?;
	info!(
		"delete \"car\" = {deleted}, search \"cart\" = {}",
		dict.search("cart")?
	);
	info!("delete \"nonexistent\" = {}", dict.delete("nonexistent")?);
	info!("{} entries left", dict.len());

	Ok(())
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt::init();

	let entries = SAMPLE
		.iter()
		.map(|&(word, frequency)| WordFrequency::new(word, frequency))
		.collect::<Result<Vec<_>, _>>()?;

	for backend in Backend::ALL {
		run(backend.create().as_mut(), &entries)?;
	}

	Ok(())
}
