use crate::aa::{AAFramework, IdSet, LabelType};

/// Computes the ids of the arguments in the grounded extension of an AF.
///
/// Unattacked arguments are accepted first.
/// Each accepted argument defeats the arguments it attacks,
/// and an argument is accepted as soon as all its attackers are defeated.
pub(crate) fn grounded_extension<T>(af: &AAFramework<T>) -> IdSet
where
    T: LabelType,
{
    let mut ext = vec![];
    let mut n_processed_args = 0;
    let mut defeated_args = vec![false; af.id_bound()];
    let mut n_undefeated_attackers = vec![0; af.id_bound()];
    for id in af.argument_ids() {
        let n = af.attackers_of_id(id).len();
        if n == 0 {
            ext.push(id);
        }
        n_undefeated_attackers[id] = n;
    }
    while n_processed_args < ext.len() {
        let id = ext[n_processed_args];
        for defeated in af.attacked_by_id(id) {
            if defeated_args[*defeated] {
                continue;
            }
            defeated_args[*defeated] = true;
            for attacked in af.attacked_by_id(*defeated) {
                n_undefeated_attackers[*attacked] -= 1;
                if n_undefeated_attackers[*attacked] == 0 {
                    ext.push(*attacked);
                }
            }
        }
        n_processed_args += 1;
    }
    ext.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_labels(af: &AAFramework<&'static str>) -> Vec<&'static str> {
        af.ids_to_labels(&grounded_extension(af))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_grounded_extension_1() {
        let af = AAFramework::new_with_attacks([
            ["a", "b"],
            ["b", "c"],
            ["b", "d"],
            ["c", "e"],
            ["d", "e"],
            ["e", "f"],
        ])
        .unwrap();
        assert_eq!(vec!["a", "c", "d", "f"], grounded_labels(&af))
    }

    #[test]
    fn test_grounded_extension_2() {
        let af = AAFramework::new_with_attacks([
            ["x", "a"],
            ["a", "b"],
            ["b", "c"],
            ["b", "d"],
            ["c", "e"],
            ["d", "e"],
            ["e", "f"],
        ])
        .unwrap();
        assert_eq!(vec!["b", "e", "x"], grounded_labels(&af))
    }

    #[test]
    fn test_grounded_extension_self_attacks() {
        let af = AAFramework::new_with_attacks([["a", "b"], ["b", "b"], ["b", "c"], ["d", "d"]])
            .unwrap();
        assert_eq!(vec!["a", "c"], grounded_labels(&af))
    }

    #[test]
    fn test_grounded_extension_after_removal() {
        let mut af = AAFramework::new_with_attacks([["a", "b"], ["b", "c"], ["c", "d"]]).unwrap();
        af.remove_arguments(["a"]);
        assert_eq!(vec!["b", "d"], grounded_labels(&af))
    }

    #[test]
    fn test_grounded_extension_is_the_characteristic_function_fixpoint() {
        let af = AAFramework::new_with_attacks([
            ["a", "b"],
            ["b", "a"],
            ["c", "d"],
            ["d", "e"],
            ["e", "f"],
            ["b", "f"],
        ])
        .unwrap();
        let mut fixpoint = IdSet::new();
        let mut n_steps = 0;
        loop {
            let next = af.characteristic_function_of_ids(&fixpoint);
            if next == fixpoint {
                break;
            }
            fixpoint = next;
            n_steps += 1;
        }
        assert!(n_steps <= af.n_arguments());
        assert_eq!(fixpoint, grounded_extension(&af));
    }
}
