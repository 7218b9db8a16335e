// validated_json is in its own test binary (validated_json_tests.rs)
