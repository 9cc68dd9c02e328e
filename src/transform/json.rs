use super::{Location, Options, Transformable, Walker};
use crate::case::CaseStyle;
use crate::error::Result;
use serde_json::{Map, Value};

impl Transformable for Value {
    fn transform(&self, style: CaseStyle, options: &Options) -> Result<Self> {
        Walker::new(style, options).json(self, &Location::Root, 0)
    }
}

impl Walker<'_> {
    pub(crate) fn json(&self, value: &Value, at: &Location<'_>, depth: usize) -> Result<Value> {
        match value {
            Value::Array(items) => {
                let depth = self.descend(depth)?;
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.json(item, &Location::Index(at, i), depth))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
            Value::Object(map) => {
                let depth = self.descend(depth)?;
                let mut renamed = Map::with_capacity(map.len());
                for (key, item) in map {
                    let new_key = self.rename(key);
                    let new_value = self.json(item, &Location::Key(at, key), depth)?;
                    if renamed.contains_key(&new_key) {
                        self.collide(&new_key, at)?;
                    }
                    renamed.insert(new_key, new_value);
                }
                Ok(Value::Object(renamed))
            }
            primitive => Ok(primitive.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::SplitPolicy;
    use crate::transform::CollisionPolicy;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn run(value: &Value, style: CaseStyle) -> Value {
        value.transform(style, &Options::default()).unwrap()
    }

    #[test]
    fn test_mixed_separators_to_camel() {
        let input = json!({"user_name": "John", "user-age": 30});
        assert_eq!(run(&input, CaseStyle::CamelCase), json!({"userName": "John", "userAge": 30}));
    }

    #[test]
    fn test_camel_to_snake() {
        let input = json!({"userName": "John"});
        assert_eq!(run(&input, CaseStyle::SnakeCase), json!({"user_name": "John"}));
    }

    #[test]
    fn test_nested_objects_to_pascal() {
        let input = json!({"first_name": "A", "nested_object": {"last_name": "B"}});
        assert_eq!(
            run(&input, CaseStyle::PascalCase),
            json!({"FirstName": "A", "NestedObject": {"LastName": "B"}})
        );
    }

    #[test]
    fn test_array_of_objects_to_upper_flat() {
        let input = json!([{"item_id": 1}, {"item_id": 2}]);
        assert_eq!(run(&input, CaseStyle::UpperFlatCase), json!([{"ITEMID": 1}, {"ITEMID": 2}]));
    }

    #[test]
    fn test_primitive_array_values_untouched() {
        let input = json!({"a": [1, 2, 3]});
        for style in CaseStyle::ALL {
            let mut expected = Map::new();
            expected.insert(style.convert("a", SplitPolicy::Legacy), json!([1, 2, 3]));
            assert_eq!(run(&input, style), Value::Object(expected));
        }
        assert_eq!(run(&input, CaseStyle::UpperFlatCase), json!({"A": [1, 2, 3]}));
    }

    #[test]
    fn test_empty_object() {
        for style in CaseStyle::ALL {
            assert_eq!(run(&json!({}), style), json!({}));
        }
    }

    #[test]
    fn test_values_without_keys_are_unchanged() {
        let inputs = [
            json!(null),
            json!(true),
            json!(42),
            json!(-1.5),
            json!("some_string-value"),
            json!([]),
            json!([1, "two_three", null, [false, ["x-y"]]]),
        ];
        for style in CaseStyle::ALL {
            for input in &inputs {
                assert_eq!(&run(input, style), input);
            }
        }
    }

    #[test]
    fn test_string_values_are_not_renamed() {
        let input = json!({"nested_object": "nested-object"});
        assert_eq!(run(&input, CaseStyle::CamelCase), json!({"nestedObject": "nested-object"}));
    }

    #[test]
    fn test_three_levels_deep() {
        let input = json!({
            "user_name": "John",
            "user-age": 30,
            "nested_object": {
                "first_name": "John",
                "last-name": "Doe",
                "nested_object": {
                    "nested_object": "nested-object",
                    "one_more_nested_object": {
                        "one_more_nested_object": "one-more-nested-object"
                    }
                }
            },
            "some_array": [{"item_id": 1}, {"item_id": 2}]
        });
        let expected = json!({
            "USER_NAME": "John",
            "USER_AGE": 30,
            "NESTED_OBJECT": {
                "FIRST_NAME": "John",
                "LAST_NAME": "Doe",
                "NESTED_OBJECT": {
                    "NESTED_OBJECT": "nested-object",
                    "ONE_MORE_NESTED_OBJECT": {
                        "ONE_MORE_NESTED_OBJECT": "one-more-nested-object"
                    }
                }
            },
            "SOME_ARRAY": [{"ITEM_ID": 1}, {"ITEM_ID": 2}]
        });
        assert_eq!(run(&input, CaseStyle::ScreamingSnakeCase), expected);
    }

    #[test]
    fn test_objects_inside_nested_arrays() {
        let input = json!({"matrix": [[{"cell_value": 1}], [2, {"cell_value": 3}]]});
        assert_eq!(
            run(&input, CaseStyle::KebabCase),
            json!({"matrix": [[{"cell-value": 1}], [2, {"cell-value": 3}]]})
        );
    }

    #[test]
    fn test_idempotent_on_canonical_keys() {
        let input = json!({"fooBar": 1, "nested": {"bazQux": [{"deepKey": true}]}});
        assert_eq!(run(&input, CaseStyle::CamelCase), input);

        let input = json!({"user_name": 1, "nested_object": {"item_id": [{"deep_key": true}]}});
        for style in CaseStyle::ALL {
            if style == CaseStyle::ScreamingSnakeCase {
                continue;
            }
            let once = run(&input, style);
            assert_eq!(run(&once, style), once, "{} is not idempotent", style);
        }
    }

    #[test]
    fn test_screaming_snake_needs_acronym_policy_to_be_idempotent() {
        let input = json!({"user_name": 1});
        let style = CaseStyle::ScreamingSnakeCase;

        // Legacy splits every capital of USER_NAME into its own word.
        let once = run(&input, style);
        assert_eq!(once, json!({"USER_NAME": 1}));
        assert_eq!(run(&once, style), json!({"U_S_E_R_N_A_M_E": 1}));

        let options = Options {
            split_policy: SplitPolicy::Acronym,
            ..Default::default()
        };
        for style in CaseStyle::ALL {
            let once = input.transform(style, &options).unwrap();
            assert_eq!(once.transform(style, &options).unwrap(), once, "{} is not idempotent", style);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = json!({"user_name": {"inner_key": 1}});
        let snapshot = input.clone();
        let _ = run(&input, CaseStyle::PascalCase);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_key_order_follows_input() {
        let input = json!({"zeta_key": 1, "alpha_key": 2, "mid_key": 3});
        let output = run(&input, CaseStyle::CamelCase);
        let keys: Vec<_> = output.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zetaKey", "alphaKey", "midKey"]);
    }

    #[test]
    fn test_collision_overwrites_by_default() {
        let input = json!({"user_name": 1, "other": 2, "userName": 3});
        let output = run(&input, CaseStyle::CamelCase);
        assert_eq!(output, json!({"userName": 3, "other": 2}));
        let keys: Vec<_> = output.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["userName", "other"]);
    }

    #[test]
    fn test_collision_warn_still_overwrites() {
        let options = Options {
            on_collision: CollisionPolicy::Warn,
            ..Default::default()
        };
        let input = json!({"a_b": 1, "a-b": 2});
        assert_eq!(input.transform(CaseStyle::SnakeCase, &options).unwrap(), json!({"a_b": 2}));
    }

    #[test]
    fn test_collision_error_reports_path() {
        let options = Options {
            on_collision: CollisionPolicy::Error,
            ..Default::default()
        };
        let input = json!({"items": [{"ok": 1}, {"item_id": 1, "itemId": 2}]});
        let err = input.transform(CaseStyle::SnakeCase, &options).unwrap_err();
        assert_eq!(
            err,
            Error::KeyCollision {
                key: "item_id".to_string(),
                path: "$.items[1]".to_string(),
            }
        );
    }

    #[test]
    fn test_acronym_policy() {
        let options = Options {
            split_policy: SplitPolicy::Acronym,
            ..Default::default()
        };
        let input = json!({"userID": 1, "HTTPServer": {"maxConnections": 2}});
        assert_eq!(
            input.transform(CaseStyle::SnakeCase, &options).unwrap(),
            json!({"user_id": 1, "http_server": {"max_connections": 2}})
        );
        assert_eq!(
            run(&input, CaseStyle::SnakeCase),
            json!({"user_i_d": 1, "h_t_t_p_server": {"max_connections": 2}})
        );
    }

    #[test]
    fn test_depth_limit() {
        let input = json!({"a": {"b": {"c": 1}}});
        let options = |limit| Options {
            max_depth: Some(limit),
            ..Default::default()
        };
        assert!(input.transform(CaseStyle::CamelCase, &options(3)).is_ok());
        assert_eq!(
            input.transform(CaseStyle::CamelCase, &options(2)),
            Err(Error::DepthExceeded { limit: 2 })
        );
        // Primitives are not containers and never count towards the limit.
        assert!(json!(5).transform(CaseStyle::CamelCase, &options(0)).is_ok());
    }

    #[test]
    fn test_empty_key_stays_empty() {
        let input = json!({"": 1, "__": 2});
        // Both keys reduce to no words, so the second overwrites the first.
        assert_eq!(run(&input, CaseStyle::PascalCase), json!({"": 2}));
    }
}
