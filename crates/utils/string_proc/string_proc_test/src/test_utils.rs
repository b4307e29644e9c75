/// Every string built from `alphabet` with length up to `max_len`, in
/// length order. Used to sweep small input spaces exhaustively.
pub fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut last_layer = vec![String::new()];

    for _ in 0..max_len {
        let mut layer = Vec::with_capacity(last_layer.len() * alphabet.len());
        for prefix in &last_layer {
            for c in alphabet {
                let mut s = prefix.clone();
                s.push(*c);
                layer.push(s);
            }
        }
        result.extend(layer.iter().cloned());
        last_layer = layer;
    }

    result
}
